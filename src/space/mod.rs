//! Coordinate spaces, conversions between them and the drawing helper built on top.

pub mod convert;
pub mod draw;
pub mod model;
/// World/viewport pair loaded as configuration.
pub mod scene;
