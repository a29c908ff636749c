use crate::scene::{Image, LineStyle, Path, Shape, ShapeStyle, Text};

/// Leaf draw command, borrowed from the scene tree it was flattened from.
///
/// Geometry stays in the leaf's local frame; the owning [`DrawItem`]
/// carries the transform that places it on the canvas.
///
/// Extending the scene:
/// - add a `FormStyle` or `Element` variant under `scene`
/// - add a matching variant here
/// - emit it from the walker in `render::flatten`
///
/// [`DrawItem`]: super::DrawItem
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd<'a> {
    /// Open polyline stroke.
    Path { line: &'a LineStyle, path: &'a Path },
    /// Closed shape, stroked or filled.
    Shape { style: &'a ShapeStyle, shape: &'a Shape },
    /// Image anchored at the local origin; size comes from the decoded source.
    Image(&'a Image),
    /// Text anchored at the local origin; size comes from the text shaper.
    Text(&'a Text),
}

impl<'a> DrawCmd<'a> {
    /// Short label for logs and debug dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Path { .. } => "path",
            DrawCmd::Shape { style: ShapeStyle::Outline(_), .. } => "outline",
            DrawCmd::Shape { style: ShapeStyle::Fill(_), .. } => "fill",
            DrawCmd::Image(_) => "image",
            DrawCmd::Text(_) => "text",
        }
    }
}
