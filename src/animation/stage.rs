//! Passive keyframe timeline descriptors.
//!
//! These are read by an external animation driver; nothing here keeps time.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{SceneError, SceneResult};

/// A keyframe state valid from start progress `sp` to end progress `ep`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationStage<S> {
    /// Keyframe state.
    pub state: S,
    /// Start progress, a fraction of the total duration.
    pub sp: f64,
    /// End progress, a fraction of the total duration.
    pub ep: f64,
}

impl<S> AnimationStage<S> {
    /// Build a stage.
    pub fn new(state: S, sp: f64, ep: f64) -> Self {
        Self { state, sp, ep }
    }

    /// Whether `progress` lies within `[sp, ep]`.
    pub fn contains(&self, progress: f64) -> bool {
        self.sp <= progress && progress <= self.ep
    }
}

/// A named run of consecutive stages: `stages[idx..idx + length]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStageSet {
    /// Set name.
    pub name: String,
    /// Number of stages in the set.
    pub length: usize,
    /// Offset of the first stage in the flattened stage list.
    pub idx: usize,
}

/// A full keyframe schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation<S> {
    /// Total duration; stage progress values are fractions of it.
    #[serde(rename = "totalDuration")]
    pub total_duration: f64,
    /// Flattened stage list.
    pub stages: Vec<AnimationStage<S>>,
    /// Named views into `stages`.
    #[serde(rename = "stageSets", default)]
    pub stage_sets: Vec<AnimationStageSet>,
}

impl<S> Animation<S> {
    /// Check the invariants a driver relies on for deterministic playback.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.total_duration.is_finite() || self.total_duration <= 0.0 {
            return Err(SceneError::validation(
                "Animation totalDuration must be finite and > 0",
            ));
        }
        for (i, stage) in self.stages.iter().enumerate() {
            if !stage.sp.is_finite() || !stage.ep.is_finite() {
                return Err(SceneError::validation(format!(
                    "stage {i}: sp/ep must be finite"
                )));
            }
            if stage.sp > stage.ep {
                return Err(SceneError::validation(format!(
                    "stage {i}: sp ({}) must be <= ep ({})",
                    stage.sp, stage.ep
                )));
            }
        }
        for set in &self.stage_sets {
            let stages = self.stages_in(set)?;
            if !stages.windows(2).all(|w| w[0].ep <= w[1].sp) {
                return Err(SceneError::validation(format!(
                    "stage set '{}': stages must be ordered and non-overlapping",
                    set.name
                )));
            }
        }
        Ok(())
    }

    /// Look up a stage set by name.
    pub fn stage_set(&self, name: &str) -> Option<&AnimationStageSet> {
        self.stage_sets.iter().find(|s| s.name == name)
    }

    /// The stages a set refers to.
    pub fn stages_in(&self, set: &AnimationStageSet) -> SceneResult<&[AnimationStage<S>]> {
        let end = set.idx.checked_add(set.length).ok_or_else(|| {
            SceneError::validation(format!("stage set '{}': range overflows", set.name))
        })?;
        self.stages.get(set.idx..end).ok_or_else(|| {
            SceneError::validation(format!(
                "stage set '{}': range {}..{} exceeds {} stages",
                set.name,
                set.idx,
                end,
                self.stages.len()
            ))
        })
    }
}

impl<S> Animation<S>
where
    S: DeserializeOwned,
{
    /// Parse an animation from a JSON reader.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R) -> SceneResult<Self> {
        let anim: Animation<S> = serde_json::from_reader(r)
            .map_err(|e| SceneError::serde(format!("parse animation JSON: {e}")))?;
        tracing::debug!(
            stages = anim.stages.len(),
            stage_sets = anim.stage_sets.len(),
            "animation loaded"
        );
        Ok(anim)
    }

    /// Parse an animation from a JSON string.
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stage.rs"]
mod tests;
