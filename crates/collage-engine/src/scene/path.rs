use crate::coords::Vec2;

/// Ordered point sequence.
///
/// Order is render-significant: it defines the polyline for traced paths and
/// the winding for polygons. Empty paths are valid and render nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path(pub Vec<Vec2>);

impl Path {
    #[inline]
    pub fn new(points: impl Into<Vec<Vec2>>) -> Self {
        Self(points.into())
    }

    /// Two-point path: a line segment from `a` to `b`.
    #[inline]
    pub fn segment(a: Vec2, b: Vec2) -> Self {
        Self(vec![a, b])
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Vec2>> for Path {
    #[inline]
    fn from(points: Vec<Vec2>) -> Self {
        Self(points)
    }
}

impl FromIterator<Vec2> for Path {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_is_two_points_in_order() {
        let p = Path::segment(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(p.points(), &[Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    }

    #[test]
    fn new_keeps_points_verbatim() {
        let pts = vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(-1.0, 5.0)];
        assert_eq!(Path::new(pts.clone()).0, pts);
    }

    #[test]
    fn empty_path_is_valid() {
        let p: Path = std::iter::empty().collect();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }
}
