use std::ops::{Add, Mul, Sub};

use crate::colors::lerp;

/// A 2D vector of `f32`.
///
/// Used both for sub-pixel screen positions (split vertices, span edges) and
/// for UV pairs carried alongside triangle vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise linear interpolation towards `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(lerp(self.x, other.x, t), lerp(self.y, other.y, t))
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_halfway() {
        let v = Vec2::ZERO.lerp(Vec2::new(4.0, -2.0), 0.5);
        assert_relative_eq!(v.x, 2.0);
        assert_relative_eq!(v.y, -1.0);
    }

    #[test]
    fn arithmetic() {
        let v = (Vec2::new(1.0, 2.0) + Vec2::ONE - Vec2::new(0.5, 0.5)) * 2.0;
        assert_eq!(v, Vec2::new(3.0, 5.0));
    }
}
