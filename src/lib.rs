//! scenespace maps points between the coordinate spaces of a 2D canvas scene and blends
//! keyframe states for animation.
//!
//! # Spaces
//!
//! - **World**: the logical, unscaled authoring canvas ([`World`]).
//! - **World-proportional**: fractions `0..=1` of the world extent.
//! - **Viewport**: pixels of the rendering surface, anchored in world space and scaled by
//!   `sharpness / s` ([`Viewport`]).
//!
//! Points and rects carry their space in the type ([`WorldPoint`], [`ViewportPoint`], ...),
//! so mixing spaces without a conversion call does not compile. The converters in
//! [`space::convert`] are pure and mutually inverse.
//!
//! # Interpolation
//!
//! [`StructuralLerp`] blends two [`Value`] trees of the same shape at a progress `p`,
//! recursing through sequences and structures. Text is never blended. Shape
//! disagreements are reported as [`SceneError`] values instead of producing NaN.
//!
//! # Animation descriptors
//!
//! [`Animation`], [`AnimationStage`] and [`AnimationStageSet`] describe a keyframe
//! timeline for an external driver. Nothing in this crate keeps time or renders.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod paint;

pub mod interp;
pub mod space;

pub use animation::stage::{Animation, AnimationStage, AnimationStageSet};
pub use foundation::error::{SceneError, SceneResult};
pub use interp::lerp::{
    InterpConfig, Lerp, SequencePolicy, StructuralLerp, lerp_f64, lerp_obj, lerp_obj_with,
    lerp_value,
};
pub use interp::typed::{from_value, to_value};
pub use interp::value::{Value, ValueKind};
pub use paint::palette::{NamedColor, Rgb8, parse_hex};
pub use space::convert::{
    prop_rect_to_world, to_world_absolute, viewport_rect_to_world, viewport_scaling,
    viewport_to_world, world_rect_to_viewport, world_to_viewport,
};
pub use space::draw::{DrawSurface, PathRecorder, ROUND_RECT_RADIUS, draw_round_rect_tl};
pub use space::model::{
    Point, Rect, Space, Viewport, ViewportPoint, ViewportRect, ViewportSpace, World, WorldPoint,
    WorldPropPoint, WorldPropRect, WorldPropSpace, WorldRect, WorldSpace,
};
pub use space::scene::Scene;
