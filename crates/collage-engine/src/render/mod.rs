//! Scene flattening.
//!
//! Walks an [`Element`](crate::scene::Element) tree and produces a
//! renderer-agnostic draw stream. Each leaf carries its fully composed
//! transform, so a painter only needs to apply one matrix per item.
//!
//! Convention:
//! - canvas geometry is in logical pixels (top-left origin, +Y down)
//! - items are in paint order; nothing is re-sorted

mod cmd;
mod flatten;
mod list;

pub use cmd::DrawCmd;
pub use flatten::{collage_point, flatten, flatten_with, FlattenOptions};
pub use list::{Clip, ClipId, DrawItem, DrawList, DEFAULT_ARC_SEGMENTS};
