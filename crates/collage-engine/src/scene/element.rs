use crate::coords::{Rect, Vec2};

use super::{Form, Text};

/// Fixed-size canvas holding forms drawn in list order (later forms on top).
#[derive(Debug, Clone, PartialEq)]
pub struct Collage {
    pub width: f32,
    pub height: f32,
    /// Added once to every top-level form position. `None` = top-left origin.
    pub origin_offset: Option<Vec2>,
    pub forms: Vec<Form>,
}

impl Collage {
    /// Effective drawing origin in canvas coordinates.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin_offset.unwrap_or_default()
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Canvas bounds in its own coordinates: `[0, w] × [0, h]`.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Image reference, optionally cropped to a sub-rectangle of the source.
///
/// Neither the path nor the crop is checked here; a missing file or an
/// out-of-bounds crop is reported by whatever loads the image.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    /// Source pixel rectangle. `None` = whole image.
    pub crop: Option<Rect>,
    pub src: String,
}

/// Renderable unit: a collage, an image or a text run.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Collage(Collage),
    Image(Image),
    Text(Text),
}

impl Element {
    /// Collage with its drawing origin at the canvas top-left.
    pub fn collage(width: f32, height: f32, forms: Vec<Form>) -> Self {
        Element::Collage(Collage { width, height, origin_offset: None, forms })
    }

    /// Collage with its drawing origin at the canvas centre.
    pub fn centered_collage(width: f32, height: f32, forms: Vec<Form>) -> Self {
        let offset = Vec2::new(width / 2.0, height / 2.0);
        Element::Collage(Collage { width, height, origin_offset: Some(offset), forms })
    }

    /// Collage panned so world point `focus` lands on the canvas centre.
    pub fn fixed_collage(width: f32, height: f32, focus: Vec2, forms: Vec<Form>) -> Self {
        let offset = Vec2::new(width / 2.0 - focus.x, height / 2.0 - focus.y);
        Element::Collage(Collage { width, height, origin_offset: Some(offset), forms })
    }

    pub fn image(src: impl Into<String>) -> Self {
        Element::Image(Image { crop: None, src: src.into() })
    }

    pub fn cropped_image(crop: Rect, src: impl Into<String>) -> Self {
        Element::Image(Image { crop: Some(crop), src: src.into() })
    }

    pub fn text(text: impl Into<Text>) -> Self {
        Element::Text(text.into())
    }

    /// Origin offset if this is a collage that has one.
    pub fn origin_offset(&self) -> Option<Vec2> {
        match self {
            Element::Collage(c) => c.origin_offset,
            Element::Image(_) | Element::Text(_) => None,
        }
    }
}
