//! Coordinate and geometry types shared by the scene model and renderers.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//! - Positive angles (radians) turn +X toward +Y

mod rect;
mod transform;
mod vec2;

pub use rect::Rect;
pub use transform::Transform2D;
pub use vec2::Vec2;
