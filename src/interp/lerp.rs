use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{SceneError, SceneResult};
use crate::interp::typed::{from_value, to_value};
use crate::interp::value::Value;
use crate::space::model::{Point, Rect};

/// Linear blend in the `(1 - p) * a + p * b` form.
///
/// Both endpoints are reproduced exactly: `p = 0` yields `a`, `p = 1` yields `b`.
#[inline]
pub fn lerp_f64(a: f64, b: f64, p: f64) -> f64 {
    (1.0 - p) * a + p * b
}

/// Infallible interpolation for typed values whose shape is fixed at compile time.
pub trait Lerp: Sized {
    /// Blend `a` towards `b` at progress `t` (not clamped).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        lerp_f64(*a, *b, t)
    }
}

impl<S> Lerp for Point<S> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(lerp_f64(a.x, b.x, t), lerp_f64(a.y, b.y, t))
    }
}

impl<S> Lerp for Rect<S> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Rect::new(
            <Point<S> as Lerp>::lerp(&a.tl, &b.tl, t),
            lerp_f64(a.w, b.w, t),
            lerp_f64(a.h, b.h, t),
        )
    }
}

/// What to do when the source sequence is shorter than the target sequence.
///
/// The output always has the target's length; surplus source elements are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencePolicy {
    /// Fail with [`SceneError::SequenceLength`].
    #[default]
    Strict,
    /// Use the target's element unblended where the source has none.
    TargetFallback,
}

/// Structural interpolation settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpConfig {
    /// Handling of source sequences shorter than their target.
    #[serde(default)]
    pub sequence_policy: SequencePolicy,
}

#[derive(Clone, Copy, Debug)]
enum Segment<'v> {
    Key(&'v str),
    Index(usize),
}

struct PathDisplay<'a, 'v>(&'a [Segment<'v>]);

impl fmt::Display for PathDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for seg in self.0 {
            match seg {
                Segment::Key(k) => write!(f, ".{k}")?,
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

fn path_string(path: &[Segment<'_>]) -> String {
    PathDisplay(path).to_string()
}

/// Recursive blender over [`Value`] trees.
///
/// The target (second) value decides the output shape:
/// - text is copied from the target verbatim,
/// - numbers blend with [`lerp_f64`],
/// - sequences blend element-wise and keep the target's length,
/// - structures blend field-wise over the target's keys only.
///
/// Kind disagreements and missing source keys are reported as errors carrying the
/// offending path.
#[derive(Clone, Copy, Debug, Default)]
pub struct StructuralLerp {
    config: InterpConfig,
}

impl StructuralLerp {
    /// Blender with the given settings.
    pub fn new(config: InterpConfig) -> Self {
        Self { config }
    }

    /// Active settings.
    pub fn config(&self) -> InterpConfig {
        self.config
    }

    /// Blend `a` towards `b` at progress `p`.
    ///
    /// `p` is not clamped; values outside `0..=1` extrapolate linearly.
    #[tracing::instrument(level = "trace", skip(self, a, b))]
    pub fn lerp(&self, a: &Value, b: &Value, p: f64) -> SceneResult<Value> {
        let mut path = Vec::new();
        self.blend(a, b, p, &mut path)
    }

    fn blend<'v>(
        &self,
        a: &'v Value,
        b: &'v Value,
        p: f64,
        path: &mut Vec<Segment<'v>>,
    ) -> SceneResult<Value> {
        match b {
            Value::Text(s) => Ok(Value::Text(s.clone())),
            Value::Number(nb) => match a {
                Value::Number(na) => Ok(Value::Number(lerp_f64(*na, *nb, p))),
                other => Err(mismatch(path, b, other)),
            },
            Value::Sequence(items_b) => match a {
                Value::Sequence(items_a) => Ok(Value::Sequence(
                    self.blend_sequence(items_a, items_b, p, path)?,
                )),
                other => Err(mismatch(path, b, other)),
            },
            Value::Structure(fields_b) => {
                let Value::Structure(fields_a) = a else {
                    return Err(mismatch(path, b, a));
                };
                let mut out = std::collections::BTreeMap::new();
                for (key, vb) in fields_b {
                    let blended = match (fields_a.get(key), vb) {
                        (_, Value::Text(s)) => Value::Text(s.clone()),
                        (Some(va), _) => {
                            path.push(Segment::Key(key));
                            let v = self.blend(va, vb, p, path)?;
                            path.pop();
                            v
                        }
                        (None, _) => {
                            return Err(SceneError::missing_key(
                                path_string(path),
                                key.as_str(),
                            ));
                        }
                    };
                    out.insert(key.clone(), blended);
                }
                Ok(Value::Structure(out))
            }
        }
    }

    fn blend_sequence<'v>(
        &self,
        a: &'v [Value],
        b: &'v [Value],
        p: f64,
        path: &mut Vec<Segment<'v>>,
    ) -> SceneResult<Vec<Value>> {
        if a.len() < b.len() && self.config.sequence_policy == SequencePolicy::Strict {
            return Err(SceneError::SequenceLength {
                path: path_string(path),
                expected: b.len(),
                found: a.len(),
            });
        }

        let mut out = Vec::with_capacity(b.len());
        for (idx, vb) in b.iter().enumerate() {
            path.push(Segment::Index(idx));
            let v = match a.get(idx) {
                Some(va) => self.blend(va, vb, p, path)?,
                None => {
                    tracing::debug!(
                        path = %PathDisplay(path.as_slice()),
                        "no source element, using target"
                    );
                    vb.clone()
                }
            };
            path.pop();
            out.push(v);
        }
        Ok(out)
    }
}

fn mismatch(path: &[Segment<'_>], expected: &Value, found: &Value) -> SceneError {
    SceneError::shape_mismatch(
        path_string(path),
        expected.kind().as_str(),
        found.kind().as_str(),
    )
}

/// Blend two values with the default (strict) settings.
pub fn lerp_value(a: &Value, b: &Value, p: f64) -> SceneResult<Value> {
    StructuralLerp::default().lerp(a, b, p)
}

/// Blend two typed keyframe states by way of their [`Value`] form.
///
/// `T` must serialize to numbers, strings, sequences and maps only. Integer fields
/// accept blended numbers that land on a whole value; NaN and infinities pass through
/// to floating point fields unchanged.
pub fn lerp_obj<T>(a: &T, b: &T, p: f64) -> SceneResult<T>
where
    T: Serialize + DeserializeOwned,
{
    lerp_obj_with(&StructuralLerp::default(), a, b, p)
}

/// [`lerp_obj`] with explicit settings.
pub fn lerp_obj_with<T>(lerp: &StructuralLerp, a: &T, b: &T, p: f64) -> SceneResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let va = to_value(a)?;
    let vb = to_value(b)?;
    from_value(lerp.lerp(&va, &vb, p)?)
}

#[cfg(test)]
#[path = "../../tests/unit/interp/lerp.rs"]
mod tests;
