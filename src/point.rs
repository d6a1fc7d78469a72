//! Colored integer screen-space points.

use crate::colors::Color;

/// A pixel coordinate paired with a color.
///
/// The buffer uses a bottom-left origin: `y` grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Point {
    pub const fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }
}
