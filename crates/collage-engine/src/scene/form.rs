use crate::coords::{Rect, Transform2D, Vec2};
use crate::paint::{Color, Gradient};

use super::{Element, FillStyle, LineStyle, Path, Shape, Text};

/// Paint applied to a [`Shape`]: stroked or filled, never both.
///
/// Draw a shape twice (one outlined form, one filled form) to get both.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeStyle {
    Outline(LineStyle),
    Fill(FillStyle),
}

/// What a [`Form`] draws.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStyle {
    /// Open polyline, stroke only.
    Path(LineStyle, Path),
    Shape(ShapeStyle, Shape),
    /// Embedded element. Collages are centred on the form's origin; images and
    /// text are anchored there.
    Element(Element),
    /// Sub-tree of forms. The optional matrix sits between the group's own
    /// transform and its children's transforms.
    Group(Option<Transform2D>, Vec<Form>),
}

/// Positioned, styled node of the scene tree.
///
/// Local geometry is scaled by `scale`, rotated by `theta` about the local
/// origin, then translated by `(x, y)`.
///
/// Transform combinators are relative and return a new value:
///
/// ```
/// use collage_engine::coords::Vec2;
/// use collage_engine::paint::Color;
/// use collage_engine::scene::{Form, Shape};
///
/// let f = Form::filled(Color::black(), Shape::square(10.0))
///     .rotate(0.5)
///     .rotate(0.25)
///     .move_by(Vec2::new(4.0, 0.0));
/// assert_eq!(f.theta, 0.75);
/// assert_eq!(f.x, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    /// Rotation in radians. Unrestricted; wraps through trig.
    pub theta: f32,
    /// Uniform scale. Negative values mirror.
    pub scale: f32,
    pub x: f32,
    pub y: f32,
    /// Opacity multiplier in [0, 1], applied to this form and its children.
    pub alpha: f32,
    pub style: FormStyle,
}

impl Form {
    /// Identity-transform form wrapping `style`.
    #[inline]
    pub fn new(style: FormStyle) -> Self {
        Self { theta: 0.0, scale: 1.0, x: 0.0, y: 0.0, alpha: 1.0, style }
    }

    // ── constructors ──────────────────────────────────────────────────────

    pub fn filled(color: Color, shape: Shape) -> Self {
        Self::fill(FillStyle::Solid(color), shape)
    }

    pub fn textured(src: impl Into<String>, shape: Shape) -> Self {
        Self::fill(FillStyle::Texture(src.into()), shape)
    }

    pub fn gradient(gradient: Gradient, shape: Shape) -> Self {
        Self::fill(FillStyle::Gradient(gradient), shape)
    }

    pub fn fill(style: FillStyle, shape: Shape) -> Self {
        Self::new(FormStyle::Shape(ShapeStyle::Fill(style), shape))
    }

    pub fn outlined(line: LineStyle, shape: Shape) -> Self {
        Self::new(FormStyle::Shape(ShapeStyle::Outline(line), shape))
    }

    pub fn traced(line: LineStyle, path: Path) -> Self {
        Self::new(FormStyle::Path(line, path))
    }

    /// Cropped region of an image, as a form.
    pub fn sprite(crop: Rect, src: impl Into<String>) -> Self {
        Self::element(Element::cropped_image(crop, src))
    }

    pub fn element(element: Element) -> Self {
        Self::new(FormStyle::Element(element))
    }

    pub fn text(text: impl Into<Text>) -> Self {
        Self::element(Element::Text(text.into()))
    }

    pub fn group(forms: Vec<Form>) -> Self {
        Self::new(FormStyle::Group(None, forms))
    }

    /// Group whose children are drawn through `matrix` first.
    pub fn group_transform(matrix: Transform2D, forms: Vec<Form>) -> Self {
        Self::new(FormStyle::Group(Some(matrix), forms))
    }

    /// Empty group. Draws nothing.
    pub fn blank() -> Self {
        Self::group(Vec::new())
    }

    // ── transform combinators ─────────────────────────────────────────────

    /// Adds `theta` radians to the current rotation.
    #[must_use]
    pub fn rotate(self, theta: f32) -> Self {
        Self { theta: self.theta + theta, ..self }
    }

    /// Multiplies the current scale by `n`.
    #[must_use]
    pub fn scale(self, n: f32) -> Self {
        Self { scale: self.scale * n, ..self }
    }

    /// Adds `v` to the current position.
    #[must_use]
    pub fn move_by(self, v: Vec2) -> Self {
        Self { x: self.x + v.x, y: self.y + v.y, ..self }
    }

    #[must_use]
    pub fn move_x(self, dx: f32) -> Self {
        self.move_by(Vec2::new(dx, 0.0))
    }

    #[must_use]
    pub fn move_y(self, dy: f32) -> Self {
        self.move_by(Vec2::new(0.0, dy))
    }

    /// Sets opacity. Unlike the transform combinators this replaces the value.
    #[must_use]
    pub fn alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// `translate(x, y) · rotate(theta) · scale(scale)`.
    #[inline]
    pub fn local_transform(&self) -> Transform2D {
        Transform2D::trs(self.position(), self.theta, self.scale)
    }

    /// Transform from this form's children into its parent frame.
    ///
    /// For groups with a matrix this is `local_transform() · matrix`; for every
    /// other form it equals [`local_transform`](Self::local_transform).
    pub fn child_transform(&self) -> Transform2D {
        match &self.style {
            FormStyle::Group(Some(matrix), _) => self.local_transform() * *matrix,
            _ => self.local_transform(),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.style, FormStyle::Group(..))
    }
}
