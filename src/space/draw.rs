//! Drawing helpers that sit on top of the converters.
//!
//! The actual rendering surface is an external collaborator; it is reached only through
//! [`DrawSurface`].

use kurbo::{BezPath, RoundedRect, Shape};

use crate::space::convert::to_world_absolute;
use crate::space::model::{World, WorldPropPoint};

/// Corner radius used by [`draw_round_rect_tl`], in world units.
pub const ROUND_RECT_RADIUS: f64 = 6.0;

/// Path construction and stroking, as exposed by a 2D canvas context.
pub trait DrawSurface {
    /// Start a new path, discarding any pending sub-paths.
    fn begin_path(&mut self);
    /// Append a rounded rectangle sub-path.
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64);
    /// Stroke the current path.
    fn stroke(&mut self);
}

/// Stroke a rounded rectangle authored in world-proportional space.
///
/// `tl` is converted with [`to_world_absolute`]; `w`/`h` are fractions of the world extent.
pub fn draw_round_rect_tl<D: DrawSurface + ?Sized>(
    tl: WorldPropPoint,
    w: f64,
    h: f64,
    world: &World,
    surface: &mut D,
) {
    let world_tl = to_world_absolute(tl, world);
    surface.begin_path();
    surface.round_rect(
        world_tl.x,
        world_tl.y,
        w * world.w,
        h * world.h,
        ROUND_RECT_RADIUS,
    );
    surface.stroke();
}

/// A [`DrawSurface`] that records every stroked path as a kurbo [`BezPath`].
#[derive(Clone, Debug, Default)]
pub struct PathRecorder {
    current: BezPath,
    strokes: Vec<BezPath>,
}

impl PathRecorder {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths stroked so far, in stroke order.
    pub fn strokes(&self) -> &[BezPath] {
        &self.strokes
    }

    /// Take the recorded strokes, leaving the recorder empty.
    pub fn take_strokes(&mut self) -> Vec<BezPath> {
        std::mem::take(&mut self.strokes)
    }
}

impl DrawSurface for PathRecorder {
    fn begin_path(&mut self) {
        self.current = BezPath::new();
    }

    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        let rr = RoundedRect::new(x, y, x + w, y + h, radius);
        for el in rr.path_elements(0.1) {
            self.current.push(el);
        }
    }

    fn stroke(&mut self) {
        // Stroking does not consume the path.
        self.strokes.push(self.current.clone());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/space/draw.rs"]
mod tests;
