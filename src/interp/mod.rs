//! Structural keyframe interpolation.

/// `Lerp` for typed values and the recursive blender for [`value::Value`] trees.
pub mod lerp;
pub mod typed;
pub mod value;
