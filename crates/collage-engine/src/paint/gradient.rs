use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Gradient fill, defined in the local coordinate frame of the shape it fills.
///
/// Stops are kept in the order given. Renderers may sort or clamp them.
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    /// Color varies along the line from `start` to `end`.
    Linear {
        start: Vec2,
        end: Vec2,
        stops: Vec<ColorStop>,
    },
    /// Color varies between two circles.
    Radial {
        start: Vec2,
        start_radius: f32,
        end: Vec2,
        end_radius: f32,
        stops: Vec<ColorStop>,
    },
}

impl Gradient {
    pub fn linear(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Gradient::Linear { start, end, stops }
    }

    pub fn radial(
        start: Vec2,
        start_radius: f32,
        end: Vec2,
        end_radius: f32,
        stops: Vec<ColorStop>,
    ) -> Self {
        Gradient::Radial { start, start_radius, end, end_radius, stops }
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }

    /// Returns true when the gradient definition is structurally usable.
    ///
    /// An unusable gradient is still a valid value; renderers decide what to draw.
    pub fn is_valid(&self) -> bool {
        let stops_ok = self.stops().len() >= 2
            && self.stops().iter().all(|s| s.t.is_finite() && s.color.is_finite());
        let geometry_ok = match *self {
            Gradient::Linear { start, end, .. } => {
                start.is_finite() && end.is_finite() && start != end
            }
            Gradient::Radial { start, start_radius, end, end_radius, .. } => {
                start.is_finite()
                    && end.is_finite()
                    && start_radius >= 0.0
                    && end_radius >= 0.0
                    && (start != end || start_radius != end_radius)
            }
        };
        stops_ok && geometry_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_stops() -> Vec<ColorStop> {
        vec![ColorStop::new(0.0, Color::black()), ColorStop::new(1.0, Color::white())]
    }

    #[test]
    fn linear_with_two_stops_is_valid() {
        let g = Gradient::linear(Vec2::zero(), Vec2::new(10.0, 0.0), two_stops());
        assert!(g.is_valid());
        assert_eq!(g.stops().len(), 2);
    }

    #[test]
    fn linear_with_coincident_ends_is_invalid() {
        let g = Gradient::linear(Vec2::zero(), Vec2::zero(), two_stops());
        assert!(!g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let stops = vec![ColorStop::new(0.0, Color::black())];
        let g = Gradient::radial(Vec2::zero(), 0.0, Vec2::zero(), 5.0, stops);
        assert!(!g.is_valid());
    }

    #[test]
    fn concentric_radial_is_valid() {
        let g = Gradient::radial(Vec2::zero(), 0.0, Vec2::zero(), 5.0, two_stops());
        assert!(g.is_valid());
    }
}
