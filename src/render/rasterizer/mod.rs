//! Triangle rasterization.
//!
//! [`ScanlineRasterizer`] fills triangles with flat-top/flat-bottom
//! decomposition. The per-pixel color is produced by a shading strategy
//! chosen once per triangle from the [`FillMode`](crate::FillMode).

mod scanline;
mod shader;

pub use scanline::ScanlineRasterizer;

use crate::point::Point;

/// A triangle ready for rasterization in screen space.
///
/// The order of `points` matters only for flat shading, which uses the
/// color of the first point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Point; 3],
}

impl Triangle {
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            points: [p1, p2, p3],
        }
    }
}
