use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::geometry::GeometryError;

/// 2D vector in normalized device coordinates.
///
/// Value type: every operation returns a new vector. There is deliberately no
/// `Div<f32>` impl; division goes through [`Vec2::checked_div`] so a zero
/// divisor is reported instead of turning into infinities.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Divides both components by `rhs`.
    ///
    /// Fails with [`GeometryError::DivideByZero`] when `rhs` is zero or not finite.
    #[inline]
    pub fn checked_div(self, rhs: f32) -> Result<Vec2, GeometryError> {
        if rhs == 0.0 || !rhs.is_finite() {
            return Err(GeometryError::DivideByZero);
        }
        Ok(Vec2::new(self.x / rhs, self.y / rhs))
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        (self + other) * 0.5
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn add_sub_are_componentwise() {
        assert_eq!(v(1.0, 2.0) + v(0.5, -1.0), v(1.5, 1.0));
        assert_eq!(v(1.0, 2.0) - v(0.5, -1.0), v(0.5, 3.0));
    }

    #[test]
    fn scale_by_scalar() {
        assert_eq!(v(0.2, -0.4) * 2.0, v(0.4, -0.8));
    }

    #[test]
    fn assign_ops_match_binary_ops() {
        let mut p = v(1.0, 1.0);
        p += v(0.25, 0.5);
        assert_eq!(p, v(1.25, 1.5));
        p -= v(1.25, 1.5);
        assert_eq!(p, Vec2::zero());
    }

    // ── min / max ─────────────────────────────────────────────────────────

    #[test]
    fn min_max_pick_per_component() {
        let a = v(-1.0, 3.0);
        let b = v(2.0, -4.0);
        assert_eq!(a.min(b), v(-1.0, -4.0));
        assert_eq!(a.max(b), v(2.0, 3.0));
    }

    // ── division ──────────────────────────────────────────────────────────

    #[test]
    fn checked_div_divides() {
        assert_eq!(v(1.0, -2.0).checked_div(2.0), Ok(v(0.5, -1.0)));
    }

    #[test]
    fn checked_div_by_zero_is_an_error() {
        assert_eq!(v(1.0, 1.0).checked_div(0.0), Err(GeometryError::DivideByZero));
        assert_eq!(v(1.0, 1.0).checked_div(-0.0), Err(GeometryError::DivideByZero));
    }

    #[test]
    fn checked_div_by_nan_is_an_error() {
        assert_eq!(v(1.0, 1.0).checked_div(f32::NAN), Err(GeometryError::DivideByZero));
    }

    #[test]
    fn midpoint_is_average() {
        assert_eq!(v(-1.0, 0.0).midpoint(v(1.0, 2.0)), v(0.0, 1.0));
    }
}
