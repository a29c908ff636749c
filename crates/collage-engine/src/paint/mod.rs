//! Paint model shared between the scene and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - gradient definitions used by gradient fills
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, Gradient};
