use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SceneError, SceneResult};
use crate::space::convert;
use crate::space::model::{
    Viewport, ViewportPoint, ViewportRect, World, WorldPoint, WorldPropPoint, WorldPropRect,
    WorldRect,
};

/// A world together with the viewport currently looking at it.
///
/// This is the JSON-facing configuration a driver loads once per layout pass; all
/// conversions are forwarded to [`crate::space::convert`] with this pair bound.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Authoring canvas.
    pub world: World,
    /// Current window onto the world.
    pub viewport: Viewport,
}

impl Scene {
    /// Pair a world with a viewport.
    pub fn new(world: World, viewport: Viewport) -> Self {
        Self { world, viewport }
    }

    /// Parse a scene from a JSON reader.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R) -> SceneResult<Self> {
        let scene: Scene = serde_json::from_reader(r)
            .map_err(|e| SceneError::serde(format!("parse scene JSON: {e}")))?;
        tracing::debug!(
            world_w = scene.world.w,
            world_h = scene.world.h,
            scaling = scene.viewport.scaling(),
            "scene loaded"
        );
        Ok(scene)
    }

    /// Parse a scene from a JSON string.
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SceneError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate both the world and the viewport.
    pub fn validate(&self) -> SceneResult<()> {
        self.world.validate()?;
        self.viewport.validate()
    }

    /// See [`convert::viewport_scaling`].
    pub fn scaling(&self) -> f64 {
        convert::viewport_scaling(&self.viewport)
    }

    /// See [`convert::to_world_absolute`].
    pub fn to_world_absolute(&self, p: WorldPropPoint) -> WorldPoint {
        convert::to_world_absolute(p, &self.world)
    }

    /// See [`convert::world_to_viewport`].
    pub fn world_to_viewport(&self, p: WorldPoint) -> ViewportPoint {
        convert::world_to_viewport(p, &self.world, &self.viewport)
    }

    /// See [`convert::viewport_to_world`].
    pub fn viewport_to_world(&self, p: ViewportPoint) -> WorldPoint {
        convert::viewport_to_world(p, &self.world, &self.viewport)
    }

    /// Proportional point straight to viewport pixels.
    pub fn prop_to_viewport(&self, p: WorldPropPoint) -> ViewportPoint {
        self.world_to_viewport(self.to_world_absolute(p))
    }

    /// See [`convert::prop_rect_to_world`].
    pub fn prop_rect_to_world(&self, r: WorldPropRect) -> WorldRect {
        convert::prop_rect_to_world(r, &self.world)
    }

    /// See [`convert::world_rect_to_viewport`].
    pub fn world_rect_to_viewport(&self, r: WorldRect) -> ViewportRect {
        convert::world_rect_to_viewport(r, &self.world, &self.viewport)
    }

    /// See [`convert::viewport_rect_to_world`].
    pub fn viewport_rect_to_world(&self, r: ViewportRect) -> WorldRect {
        convert::viewport_rect_to_world(r, &self.world, &self.viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/space/scene.rs"]
mod tests;
