use core::ops::Mul;

use bytemuck::{Pod, Zeroable};

use super::Vec2;

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a·x + b·y + dx, c·x + d·y + dy)`.
///
/// Multiplication follows column-vector convention: `(m * n).apply(p)` is
/// `m.apply(n.apply(p))`, so the right-hand operand is applied first.
/// Not restricted to similarity transforms; shears and non-uniform scales are valid.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, dx: f32, dy: f32) -> Self {
        Self { a, b, c, d, dx, dy }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn translation(v: Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, v.x, v.y)
    }

    /// Rotation about the origin; positive angles turn +X toward +Y.
    #[inline]
    pub fn rotation(theta: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::new(c, -s, s, c, 0.0, 0.0)
    }

    #[inline]
    pub const fn scale(n: f32) -> Self {
        Self::new(n, 0.0, 0.0, n, 0.0, 0.0)
    }

    #[inline]
    pub const fn scale_xy(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// `translation(t) * rotation(theta) * scale(scale)` in closed form.
    ///
    /// Local geometry is scaled, then rotated about the origin, then translated.
    #[inline]
    pub fn trs(t: Vec2, theta: f32, scale: f32) -> Self {
        let (s, c) = theta.sin_cos();
        Self::new(scale * c, -scale * s, scale * s, scale * c, t.x, t.y)
    }

    /// Composition where `self` is applied first and `next` second.
    #[inline]
    pub fn then(self, next: Transform2D) -> Self {
        next * self
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.b * p.y + self.dx,
            self.c * p.x + self.d * p.y + self.dy,
        )
    }

    /// Applies only the linear part (no translation); for direction vectors.
    #[inline]
    pub fn apply_vector(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    #[inline]
    pub fn translation_part(self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    #[inline]
    pub fn determinant(self) -> f32 {
        self.a * self.d - self.b * self.c
    }
}

impl Mul for Transform2D {
    type Output = Transform2D;

    #[inline]
    fn mul(self, rhs: Transform2D) -> Transform2D {
        Transform2D::new(
            self.a * rhs.a + self.b * rhs.c,
            self.a * rhs.b + self.b * rhs.d,
            self.c * rhs.a + self.d * rhs.c,
            self.c * rhs.b + self.d * rhs.d,
            self.a * rhs.dx + self.b * rhs.dy + self.dx,
            self.c * rhs.dx + self.d * rhs.dy + self.dy,
        )
    }
}
