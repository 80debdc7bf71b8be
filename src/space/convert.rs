//! Pure conversions between world-proportional, world and viewport space.
//!
//! None of these validate their inputs: a zero or negative `Viewport::s` propagates as
//! IEEE-754 infinity/NaN. Use [`Viewport::validate`] beforehand when strict values matter.

use crate::space::model::{
    Point, Rect, Viewport, ViewportPoint, ViewportRect, World, WorldPoint, WorldPropPoint,
    WorldPropRect, WorldRect,
};

/// Map a world-proportional point (fractions of the world extent) to absolute world coordinates.
///
/// No clamping: components outside `0..=1` extrapolate linearly past the world rect.
#[inline]
pub fn to_world_absolute(p: WorldPropPoint, w: &World) -> WorldPoint {
    Point::new(w.tl.x + p.x * w.w, w.tl.y + p.y * w.h)
}

/// Scaling constant between world distances and viewport pixels, `sharpness / s`.
#[inline]
pub fn viewport_scaling(v: &Viewport) -> f64 {
    v.scaling()
}

#[inline]
fn anchor_offset(w: &World, v: &Viewport) -> WorldPoint {
    w.tl - v.tl
}

/// Map an absolute world point onto the viewport: `(p + (w.tl - v.tl)) * (sharpness / s)`.
#[inline]
pub fn world_to_viewport(p: WorldPoint, w: &World, v: &Viewport) -> ViewportPoint {
    let offset = anchor_offset(w, v);
    let k = viewport_scaling(v);
    Point::new((p.x + offset.x) * k, (p.y + offset.y) * k)
}

/// Exact inverse of [`world_to_viewport`]: `(p / (sharpness / s)) - (w.tl - v.tl)`.
#[inline]
pub fn viewport_to_world(p: ViewportPoint, w: &World, v: &Viewport) -> WorldPoint {
    let offset = anchor_offset(w, v);
    let k = viewport_scaling(v);
    Point::new((p.x / k) - offset.x, (p.y / k) - offset.y)
}

/// Map a world-proportional rect to world space.
///
/// The extent is scaled by the world extent, matching how proportional shapes are drawn.
pub fn prop_rect_to_world(r: WorldPropRect, w: &World) -> WorldRect {
    Rect::new(to_world_absolute(r.tl, w), r.w * w.w, r.h * w.h)
}

/// Map a world rect onto the viewport, scaling its extent by [`viewport_scaling`].
pub fn world_rect_to_viewport(r: WorldRect, w: &World, v: &Viewport) -> ViewportRect {
    let k = viewport_scaling(v);
    Rect::new(world_to_viewport(r.tl, w, v), r.w * k, r.h * k)
}

/// Exact inverse of [`world_rect_to_viewport`].
pub fn viewport_rect_to_world(r: ViewportRect, w: &World, v: &Viewport) -> WorldRect {
    let k = viewport_scaling(v);
    Rect::new(viewport_to_world(r.tl, w, v), r.w / k, r.h / k)
}

#[cfg(test)]
#[path = "../../tests/unit/space/convert.rs"]
mod tests;
