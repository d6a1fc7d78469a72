//! RGB colors and linear color interpolation.
//!
//! Colors are carried as `f32` channels nominally in [0, 1]. Intermediate
//! values may leave that range while interpolating; they are only clamped
//! when a pixel is finally stored as 8-bit RGB.

use std::ops::{Add, Mul};

/// An RGB color with floating-point channels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build a color from 8-bit channels (`channel / 255`).
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
        )
    }

    /// Convert to 8-bit channels by truncating `channel * 255` after clamping.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

#[inline]
fn channel_to_u8(c: f32) -> u8 {
    // NaN falls through clamp unchanged and casts to 0
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// Linear interpolation between two scalars: `a + t * (b - a)`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Linearly interpolate each channel between `c0` and `c1`.
///
/// `t = 0` yields `c0`, `t = 1` yields `c1`. `t` is not clamped.
#[inline]
pub fn lerp_color(c0: Color, c1: Color, t: f32) -> Color {
    Color::new(lerp(c0.r, c1.r, t), lerp(c0.g, c1.g, t), lerp(c0.b, c1.b, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_color_endpoints_are_exact() {
        assert_eq!(lerp_color(Color::RED, Color::BLUE, 0.0), Color::RED);
        assert_eq!(lerp_color(Color::RED, Color::BLUE, 1.0), Color::BLUE);
    }

    #[test]
    fn lerp_color_midpoint() {
        let c = lerp_color(Color::RED, Color::BLUE, 0.5);
        assert_relative_eq!(c.r, 0.5);
        assert_relative_eq!(c.g, 0.0);
        assert_relative_eq!(c.b, 0.5);
    }

    #[test]
    fn to_rgb8_truncates() {
        assert_eq!(Color::new(0.5, 1.0, 0.0).to_rgb8(), [127, 255, 0]);
    }

    #[test]
    fn to_rgb8_clamps_out_of_range() {
        assert_eq!(Color::new(-0.3, 1.7, f32::NAN).to_rgb8(), [0, 255, 0]);
    }

    #[test]
    fn rgb8_round_trip_is_lossless() {
        let rgb = [12, 200, 255];
        assert_eq!(Color::from_rgb8(rgb).to_rgb8(), rgb);
    }
}
