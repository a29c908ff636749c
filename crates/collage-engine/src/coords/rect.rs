use super::Vec2;

/// Axis-aligned rectangle (top-left origin, +Y down).
///
/// Used for image crop regions (source pixel space) and canvas bounds
/// (logical pixels). Negative or oversized rectangles are carried as-is;
/// consumers decide how to treat them.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// True when the rectangle lies inside `[0, bounds.x] × [0, bounds.y]`.
    ///
    /// Renderers use this to report out-of-bounds crops; the model never calls it.
    #[inline]
    pub fn fits_within(self, bounds: Vec2) -> bool {
        let max = self.max();
        self.origin.x >= 0.0
            && self.origin.y >= 0.0
            && self.size.x >= 0.0
            && self.size.y >= 0.0
            && max.x <= bounds.x
            && max.y <= bounds.y
    }

    /// Corners in order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(self) -> [Vec2; 4] {
        let max = self.max();
        [
            self.origin,
            Vec2::new(max.x, self.origin.y),
            max,
            Vec2::new(self.origin.x, max.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── fits_within ───────────────────────────────────────────────────────

    #[test]
    fn crop_inside_image_fits() {
        assert!(r(8.0, 8.0, 16.0, 16.0).fits_within(Vec2::new(32.0, 32.0)));
    }

    #[test]
    fn crop_past_edge_does_not_fit() {
        assert!(!r(20.0, 0.0, 16.0, 16.0).fits_within(Vec2::new(32.0, 32.0)));
        assert!(!r(-1.0, 0.0, 4.0, 4.0).fits_within(Vec2::new(32.0, 32.0)));
    }

    // ── corners ───────────────────────────────────────────────────────────

    #[test]
    fn corners_run_clockwise_from_top_left() {
        let c = r(1.0, 2.0, 3.0, 4.0).corners();
        assert_eq!(c[0], Vec2::new(1.0, 2.0));
        assert_eq!(c[1], Vec2::new(4.0, 2.0));
        assert_eq!(c[2], Vec2::new(4.0, 6.0));
        assert_eq!(c[3], Vec2::new(1.0, 6.0));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
