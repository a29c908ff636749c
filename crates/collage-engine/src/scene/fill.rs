use crate::paint::{Color, Gradient};

/// Interior paint for filled shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    Solid(Color),
    /// Named texture; the name is an asset key resolved by the renderer.
    Texture(String),
    Gradient(Gradient),
}

