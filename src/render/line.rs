//! Bresenham line rasterization with per-pixel color interpolation.

use crate::colors::{lerp_color, Color};
use crate::point::Point;

use super::pixel_buffer::RenderTarget;

/// Draws straight segments between two colored points.
///
/// Uses integer-only Bresenham stepping, so a segment always covers exactly
/// `max(|dx|, |dy|) + 1` pixels, both endpoints included, with 8-connected
/// steps between them.
pub struct LineRasterizer;

impl LineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Draws a line between two points using Bresenham's line algorithm.
    ///
    /// Bresenham's algorithm picks the pixel nearest the ideal line at each
    /// step along the major axis (the axis with greater distance), using only
    /// integer arithmetic. A running decision variable `P` accumulates how far
    /// the ideal line has drifted along the minor axis; once it crosses zero we
    /// take a diagonal step instead of a straight one.
    ///
    /// Steep lines are transposed so the loop always walks the major axis, and
    /// endpoints are swapped (with their colors) so the walk goes from the
    /// smaller to the larger major coordinate. The interpolation parameter
    /// therefore increases monotonically from 0 to 1.
    ///
    /// With `smooth`, color is `lerp(c1, c2, i / dx)` at step `i`. Otherwise (or
    /// for a single-point line) each pixel takes the color of the endpoint
    /// nearer along the major axis. The midpoint goes to the far end of the
    /// walk, and a single-point line takes `p2`'s color.
    ///
    /// Only the steps whose major coordinate lands inside the target are
    /// walked, so far off-screen endpoints cost nothing extra.
    pub fn draw_line<T: RenderTarget>(&self, target: &mut T, p1: Point, p2: Point, smooth: bool) {
        self.draw_segment(
            target,
            (p1.x as i64, p1.y as i64, p1.color),
            (p2.x as i64, p2.y as i64, p2.color),
            smooth,
        );
    }

    /// [`draw_line`](Self::draw_line) on wide coordinates, for supersampled
    /// endpoints that no longer fit in `i32`.
    pub(crate) fn draw_segment<T: RenderTarget>(
        &self,
        target: &mut T,
        from: (i64, i64, Color),
        to: (i64, i64, Color),
        smooth: bool,
    ) {
        let (mut x1, mut y1, mut c1) = from;
        let (mut x2, mut y2, mut c2) = to;

        let mut dx = (x2 - x1).abs();
        let mut dy = (y2 - y1).abs();

        // Walk along y instead of x for lines steeper than 45 degrees.
        let steep = dy > dx;
        if steep {
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut x2, &mut y2);
            std::mem::swap(&mut dx, &mut dy);
        }

        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
            std::mem::swap(&mut c1, &mut c2);
        }

        let major_extent = if steep { target.height() } else { target.width() };
        let first = (-x1).max(0);
        let last = dx.min(major_extent as i64 - 1 - x1);
        if first > last {
            return;
        }

        let y_incr_direction = if y1 <= y2 { 1 } else { -1 };

        // Jump straight to `first`: minor steps already taken, and the
        // decision variable (doubled to stay in integers) at that step.
        let (wide_dx, wide_dy, wide_first) = (dx as i128, dy as i128, first as i128);
        let taken = if dx == 0 {
            0
        } else {
            (2 * wide_dy * wide_first + wide_dx) / (2 * wide_dx)
        };
        let mut p = (2 * wide_dy * (wide_first + 1) - wide_dx - 2 * wide_dx * taken) as i64;
        let mut y = y1 + y_incr_direction * taken as i64;

        for step in first..=last {
            let x = x1 + step;
            let color = Self::color_at(c1, c2, step, dx, smooth);

            if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                if steep {
                    target.plot(y, x, color);
                } else {
                    target.plot(x, y, color);
                }
            }

            if p >= 0 {
                y += y_incr_direction;
                p += 2 * (dy - dx);
            } else {
                p += 2 * dy;
            }
        }
    }

    #[inline]
    fn color_at(c1: Color, c2: Color, step: i64, dx: i64, smooth: bool) -> Color {
        if smooth && dx != 0 {
            lerp_color(c1, c2, step as f32 / dx as f32)
        } else if step < dx - step {
            c1
        } else {
            c2
        }
    }
}

impl Default for LineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
