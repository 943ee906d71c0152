use core::ops::Mul;

use crate::coords::Vec2;

/// 2D affine transform, stored as the top two rows of a 3x3 matrix.
///
/// ```text
/// | m[0] m[1] m[2] |
/// | m[3] m[4] m[5] |
/// |  0    0    1   |
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    m: [f32; 6],
}

impl Transform {
    pub const IDENTITY: Transform = Transform { m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0] };

    #[inline]
    pub const fn from_rows(a: f32, b: f32, tx: f32, c: f32, d: f32, ty: f32) -> Self {
        Self { m: [a, b, tx, c, d, ty] }
    }

    #[inline]
    pub const fn translation(offset: Vec2) -> Self {
        Self::from_rows(1.0, 0.0, offset.x, 0.0, 1.0, offset.y)
    }

    #[inline]
    pub const fn scaling(factors: Vec2) -> Self {
        Self::from_rows(factors.x, 0.0, 0.0, 0.0, factors.y, 0.0)
    }

    /// Clockwise rotation on screen (+Y down) around the origin.
    #[inline]
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_rows(cos, -sin, 0.0, sin, cos, 0.0)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `self * other`: `other` is applied first, then `self`.
    pub fn combine(&self, other: &Transform) -> Transform {
        let a = &self.m;
        let b = &other.m;
        Transform {
            m: [
                a[0] * b[0] + a[1] * b[3],
                a[0] * b[1] + a[1] * b[4],
                a[0] * b[2] + a[1] * b[5] + a[2],
                a[3] * b[0] + a[4] * b[3],
                a[3] * b[1] + a[4] * b[4],
                a[3] * b[2] + a[4] * b[5] + a[5],
            ],
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        let m = &self.m;
        Vec2::new(m[0] * p.x + m[1] * p.y + m[2], m[3] * p.x + m[4] * p.y + m[5])
    }
}

impl Default for Transform {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform {
    type Output = Transform;
    #[inline]
    fn mul(self, rhs: Transform) -> Transform {
        self.combine(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_keeps_points() {
        let p = Vec2::new(3.0, -7.5);
        assert_eq!(Transform::IDENTITY.transform_point(p), p);
        assert!(Transform::default().is_identity());
    }

    #[test]
    fn translation_then_scaling_order() {
        let t = Transform::scaling(Vec2::new(2.0, 3.0)) * Transform::translation(Vec2::new(1.0, 1.0));
        // translate first, then scale
        assert_eq!(t.transform_point(Vec2::new(0.0, 0.0)), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let t = Transform::rotation(90.0);
        assert!(approx(t.transform_point(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn combine_with_identity_is_noop() {
        let t = Transform::translation(Vec2::new(5.0, 6.0));
        assert_eq!(t * Transform::IDENTITY, t);
        assert_eq!(Transform::IDENTITY * t, t);
    }
}
