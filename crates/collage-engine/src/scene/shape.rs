use core::f32::consts::TAU;

use crate::coords::Vec2;

use super::Path;

/// Angular steps used by [`Shape::ellipse`]. The polygon carries one extra
/// closing sample, so an ellipse always has `ELLIPSE_STEPS + 1` vertices.
pub const ELLIPSE_STEPS: u32 = 15;

/// Closed set of primitive shapes, all defined in the form's local frame.
///
/// Constructors never fail. Zero or negative sizes produce degenerate values
/// that renderers are expected to draw as nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Closed polygon; the edge from the last point back to the first is implicit.
    Polygon(Path),
    /// Axis-aligned rectangle centred at the local origin.
    Rectangle { width: f32, height: f32 },
    /// Elliptical arc around `center`. Angles are radians; `scale` stretches
    /// the unit circle of `radius` per axis.
    Arc {
        center: Vec2,
        start: f32,
        sweep: f32,
        radius: f32,
        scale: Vec2,
    },
}

impl Shape {
    /// Rectangle spanning `[-w/2, w/2] × [-h/2, h/2]`.
    #[inline]
    pub const fn rect(width: f32, height: f32) -> Self {
        Shape::Rectangle { width, height }
    }

    #[inline]
    pub const fn square(n: f32) -> Self {
        Self::rect(n, n)
    }

    /// Full-sweep arc with unit aspect.
    #[inline]
    pub const fn circle(radius: f32) -> Self {
        Shape::Arc {
            center: Vec2::zero(),
            start: 0.0,
            sweep: TAU,
            radius,
            scale: Vec2::new(1.0, 1.0),
        }
    }

    /// Unit-radius arc starting at `start` and sweeping `sweep` radians,
    /// stretched by `size` per axis.
    #[inline]
    pub const fn arc(size: Vec2, start: f32, sweep: f32) -> Self {
        Shape::Arc {
            center: Vec2::zero(),
            start,
            sweep,
            radius: 1.0,
            scale: size,
        }
    }

    /// Polygon approximation of an ellipse with diameters `width` × `height`.
    ///
    /// Samples `(cos θ · w/2, sin θ · h/2)` at `θ = k · 2π/15` for `k = 0..=15`,
    /// so the last vertex repeats the first.
    pub fn ellipse(width: f32, height: f32) -> Self {
        let step = TAU / ELLIPSE_STEPS as f32;
        let (hw, hh) = (width / 2.0, height / 2.0);
        let points = (0..=ELLIPSE_STEPS)
            .map(|k| {
                let t = k as f32 * step;
                Vec2::new(t.cos() * hw, t.sin() * hh)
            })
            .collect();
        Shape::Polygon(Path(points))
    }

    /// Regular polygon with `n` vertices on a circle of radius `r`.
    ///
    /// No closing duplicate vertex. `n = 0` yields an empty polygon.
    pub fn ngon(n: u32, r: f32) -> Self {
        let step = TAU / n.max(1) as f32;
        let points = (0..n)
            .map(|k| Vec2::from_polar(r, k as f32 * step))
            .collect();
        Shape::Polygon(Path(points))
    }

    #[inline]
    pub fn polygon(points: impl Into<Vec<Vec2>>) -> Self {
        Shape::Polygon(Path::new(points))
    }

    /// Outline vertices in the local frame.
    ///
    /// - polygons: their points verbatim
    /// - rectangles: top-left, top-right, bottom-right, bottom-left
    /// - arcs: `arc_segments + 1` samples from `start` to `start + sweep` inclusive
    ///
    /// `arc_segments` of 0 is treated as 1.
    pub fn outline_points(&self, arc_segments: u32) -> Vec<Vec2> {
        match self {
            Shape::Polygon(path) => path.0.clone(),
            Shape::Rectangle { width, height } => {
                let (hw, hh) = (width / 2.0, height / 2.0);
                vec![
                    Vec2::new(-hw, -hh),
                    Vec2::new(hw, -hh),
                    Vec2::new(hw, hh),
                    Vec2::new(-hw, hh),
                ]
            }
            Shape::Arc { center, start, sweep, radius, scale } => {
                let segments = arc_segments.max(1);
                (0..=segments)
                    .map(|i| {
                        let t = start + sweep * (i as f32 / segments as f32);
                        *center + Vec2::new(radius * scale.x * t.cos(), radius * scale.y * t.sin())
                    })
                    .collect()
            }
        }
    }

    /// True when the shape has no area to draw.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Polygon(path) => path.len() < 3,
            Shape::Rectangle { width, height } => *width <= 0.0 || *height <= 0.0,
            Shape::Arc { sweep, radius, scale, .. } => {
                *sweep == 0.0 || *radius <= 0.0 || scale.x == 0.0 || scale.y == 0.0
            }
        }
    }
}
