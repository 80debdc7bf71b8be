//! Coordinate spaces and the value types that live in them.
//!
//! Three spaces share one point/rect shape but are distinct types:
//!
//! - [`WorldSpace`]: absolute, unscaled authoring coordinates.
//! - [`WorldPropSpace`]: fractions (nominally `0..=1`) of the [`World`] extent.
//! - [`ViewportSpace`]: pixels on the rendering surface.
//!
//! Moving a value between spaces always goes through [`crate::space::convert`].

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{SceneError, SceneResult};

mod sealed {
    pub trait Sealed {}
}

/// Marker trait implemented by the three coordinate-space tags.
pub trait Space:
    sealed::Sealed + Copy + Clone + fmt::Debug + PartialEq + Default + Send + Sync + 'static
{
    /// Human-readable space name used in diagnostics.
    const NAME: &'static str;
}

/// Tag for absolute world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldSpace;

/// Tag for world-proportional coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPropSpace;

/// Tag for viewport pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewportSpace;

impl sealed::Sealed for WorldSpace {}
impl sealed::Sealed for WorldPropSpace {}
impl sealed::Sealed for ViewportSpace {}

impl Space for WorldSpace {
    const NAME: &'static str = "world";
}

impl Space for WorldPropSpace {
    const NAME: &'static str = "world-prop";
}

impl Space for ViewportSpace {
    const NAME: &'static str = "viewport";
}

/// A 2D point tagged with the space it belongs to.
///
/// Arithmetic is only defined between points of the same space; the JSON form is `{x, y}`.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Point<S> {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    #[serde(skip)]
    space: PhantomData<S>,
}

/// Point in absolute world coordinates.
pub type WorldPoint = Point<WorldSpace>;
/// Point in world-proportional coordinates.
pub type WorldPropPoint = Point<WorldPropSpace>;
/// Point in viewport pixel coordinates.
pub type ViewportPoint = Point<ViewportSpace>;

impl<S> Point<S> {
    /// The origin of the space.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Build a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            space: PhantomData,
        }
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hand the raw coordinates to a kurbo-based consumer.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

// Manual impls keep the marker out of the trait bounds.
impl<S> Clone for Point<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Point<S> {}

impl<S> PartialEq for Point<S> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<S> Default for Point<S> {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl<S: Space> fmt::Debug for Point<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("space", &S::NAME)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<S> Add for Point<S> {
    type Output = Point<S>;
    #[inline]
    fn add(self, rhs: Point<S>) -> Point<S> {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S> Sub for Point<S> {
    type Output = Point<S>;
    #[inline]
    fn sub(self, rhs: Point<S>) -> Point<S> {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S> Mul<f64> for Point<S> {
    type Output = Point<S>;
    #[inline]
    fn mul(self, rhs: f64) -> Point<S> {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl<S> Div<f64> for Point<S> {
    type Output = Point<S>;
    #[inline]
    fn div(self, rhs: f64) -> Point<S> {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

/// Top-left anchored, axis-aligned rectangle in one space.
///
/// `w`/`h` are plain numbers: converting `tl` to another space never touches them.
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Rect<S> {
    /// Top-left corner.
    pub tl: Point<S>,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

/// Rectangle in absolute world coordinates.
pub type WorldRect = Rect<WorldSpace>;
/// Rectangle in world-proportional coordinates.
pub type WorldPropRect = Rect<WorldPropSpace>;
/// Rectangle in viewport pixel coordinates.
pub type ViewportRect = Rect<ViewportSpace>;

impl<S> Rect<S> {
    /// Build a rectangle from its top-left corner and extent.
    #[inline]
    pub const fn new(tl: Point<S>, w: f64, h: f64) -> Self {
        Self { tl, w, h }
    }

    /// Bottom-right corner.
    #[inline]
    pub fn br(self) -> Point<S> {
        Point::new(self.tl.x + self.w, self.tl.y + self.h)
    }

    /// Center point.
    #[inline]
    pub fn center(self) -> Point<S> {
        Point::new(self.tl.x + self.w * 0.5, self.tl.y + self.h * 0.5)
    }

    /// Half-open containment: `[tl, br)`.
    #[inline]
    pub fn contains(self, p: Point<S>) -> bool {
        let br = self.br();
        p.x >= self.tl.x && p.y >= self.tl.y && p.x < br.x && p.y < br.y
    }

    /// Hand the rectangle to a kurbo-based consumer.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::from_origin_size(self.tl.to_kurbo(), (self.w, self.h))
    }
}

impl<S> Clone for Rect<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Rect<S> {}

impl<S> PartialEq for Rect<S> {
    fn eq(&self, other: &Self) -> bool {
        self.tl == other.tl && self.w == other.w && self.h == other.h
    }
}

impl<S: Space> fmt::Debug for Rect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rect")
            .field("tl", &self.tl)
            .field("w", &self.w)
            .field("h", &self.h)
            .finish()
    }
}

/// The logical authoring canvas: its absolute origin and extent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct World {
    /// Absolute origin.
    pub tl: WorldPoint,
    /// Width in world units.
    pub w: f64,
    /// Height in world units.
    pub h: f64,
}

impl World {
    /// Build a world from its origin and extent.
    pub const fn new(tl: WorldPoint, w: f64, h: f64) -> Self {
        Self { tl, w, h }
    }

    /// The world's own extent as a rectangle.
    pub fn rect(self) -> WorldRect {
        Rect::new(self.tl, self.w, self.h)
    }

    /// Check that the world is usable for proportional mapping.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.tl.is_finite() {
            return Err(SceneError::validation("World.tl must be finite"));
        }
        if !self.w.is_finite() || !self.h.is_finite() {
            return Err(SceneError::validation("World.w/h must be finite"));
        }
        Ok(())
    }
}

/// A window onto world space.
///
/// `tl` is the viewport's own top-left expressed in world coordinates. `s` is the zoom
/// scale and `sharpness` the device pixel density multiplier; both must be `> 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Anchor of the viewport in world coordinates.
    pub tl: WorldPoint,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
    /// Zoom scale.
    pub s: f64,
    /// Pixels per logical pixel.
    pub sharpness: f64,
}

impl Viewport {
    /// Build a viewport.
    pub const fn new(tl: WorldPoint, w: f64, h: f64, s: f64, sharpness: f64) -> Self {
        Self {
            tl,
            w,
            h,
            s,
            sharpness,
        }
    }

    /// World-to-viewport scaling constant, `sharpness / s`.
    ///
    /// Computed on every call so a changed `s` or `sharpness` is always honored.
    #[inline]
    pub fn scaling(&self) -> f64 {
        self.sharpness / self.s
    }

    /// Check the `s > 0` and `sharpness > 0` preconditions of the converters.
    pub fn validate(&self) -> SceneResult<()> {
        if !self.tl.is_finite() {
            return Err(SceneError::validation("Viewport.tl must be finite"));
        }
        if !self.w.is_finite() || !self.h.is_finite() {
            return Err(SceneError::validation("Viewport.w/h must be finite"));
        }
        if !self.s.is_finite() || self.s <= 0.0 {
            return Err(SceneError::validation("Viewport.s must be finite and > 0"));
        }
        if !self.sharpness.is_finite() || self.sharpness <= 0.0 {
            return Err(SceneError::validation(
                "Viewport.sharpness must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/space/model.rs"]
mod tests;
