use crate::paint::Color;

/// How the ends of an open segment are drawn.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LineCap {
    /// Ends exactly at the endpoint.
    #[default]
    Flat,
    /// Semicircle centred on the endpoint.
    Round,
    /// Square extending half the line width past the endpoint.
    Padded,
}

/// How two connected segments meet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineJoin {
    /// Rounded corner.
    Smooth,
    /// Mitered corner; falls back to a bevel past the given miter limit.
    Sharp(f32),
    /// Bevelled corner.
    Clipped,
}

impl Default for LineJoin {
    fn default() -> Self {
        LineJoin::Sharp(10.0)
    }
}

/// Stroke description for outlined shapes and traced paths.
///
/// `dashing` alternates on/off lengths starting with "on"; empty means solid.
/// Zero-length dashes and zero widths are legal and left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    pub dashing: Vec<f32>,
    pub dash_offset: f32,
}

impl Default for LineStyle {
    /// Black, width 1, flat caps, sharp joins with limit 10, no dashing.
    fn default() -> Self {
        Self {
            color: Color::black(),
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
            dashing: Vec::new(),
            dash_offset: 0.0,
        }
    }
}

impl LineStyle {
    /// Solid line of the given color; everything else default.
    pub fn solid(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    /// Dashed line: 8 on, 4 off.
    pub fn dashed(color: Color) -> Self {
        Self { color, dashing: vec![8.0, 4.0], ..Self::default() }
    }

    /// Dotted line: 3 on, 3 off.
    pub fn dotted(color: Color) -> Self {
        Self { color, dashing: vec![3.0, 3.0], ..Self::default() }
    }

    pub fn with_width(self, width: f32) -> Self {
        Self { width, ..self }
    }

    pub fn with_cap(self, cap: LineCap) -> Self {
        Self { cap, ..self }
    }

    pub fn with_join(self, join: LineJoin) -> Self {
        Self { join, ..self }
    }

    pub fn with_dashing(self, dashing: Vec<f32>, dash_offset: f32) -> Self {
        Self { dashing, dash_offset, ..self }
    }

    #[inline]
    pub fn is_dashed(&self) -> bool {
        !self.dashing.is_empty()
    }
}
