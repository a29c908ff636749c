use crate::paint::Color;

/// Default text height in points.
pub const DEFAULT_TEXT_HEIGHT: f32 = 12.0;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum FontStyle {
    #[default]
    Normal,
    Oblique,
    Italic,
}

/// Decoration line drawn with the text.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TextLine {
    Under,
    Over,
    Through,
}

/// Styled run of text.
///
/// Only content and style live here. Measurement, shaping and glyph lookup
/// belong to the renderer, so a `Text` has no intrinsic size.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub content: String,
    pub color: Color,
    /// Font family name. `None` = renderer default.
    pub typeface: Option<String>,
    /// Height in points.
    pub height: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub line: Option<TextLine>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: Color::black(),
            typeface: None,
            height: DEFAULT_TEXT_HEIGHT,
            weight: FontWeight::default(),
            style: FontStyle::default(),
            line: None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn typeface(mut self, name: impl Into<String>) -> Self {
        self.typeface = Some(name.into());
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn line(mut self, line: TextLine) -> Self {
        self.line = Some(line);
        self
    }

    #[inline]
    pub fn bold(self) -> Self {
        self.weight(FontWeight::Bold)
    }

    #[inline]
    pub fn italic(self) -> Self {
        self.style(FontStyle::Italic)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_text_defaults() {
        let t = Text::new("héllo");
        assert_eq!(t.content, "héllo");
        assert_eq!(t.color, Color::black());
        assert_eq!(t.typeface, None);
        assert_eq!(t.height, DEFAULT_TEXT_HEIGHT);
        assert_eq!(t.weight, FontWeight::Normal);
        assert_eq!(t.style, FontStyle::Normal);
        assert_eq!(t.line, None);
    }

    #[test]
    fn builder_sets_every_field() {
        let t = Text::new("x")
            .color(Color::white())
            .typeface("DejaVu Sans")
            .height(18.0)
            .bold()
            .italic()
            .line(TextLine::Under);
        assert_eq!(t.color, Color::white());
        assert_eq!(t.typeface.as_deref(), Some("DejaVu Sans"));
        assert_eq!(t.height, 18.0);
        assert_eq!(t.weight, FontWeight::Bold);
        assert_eq!(t.style, FontStyle::Italic);
        assert_eq!(t.line, Some(TextLine::Under));
    }
}
