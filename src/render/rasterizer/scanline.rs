//! Scanline-based triangle rasterization.
//!
//! This module fills triangles with the classic scanline algorithm and
//! flat-top/flat-bottom triangle decomposition.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate into `top`, `mid`, `bot`
//! 2. **Decompose** the triangle into a flat-bottom and/or flat-top part
//! 3. **Rasterize** each row by interpolating the x, color and UV of its two
//!    bounding edges, then walking the pixels between them
//!
//! # Triangle Decomposition
//!
//! ```text
//!        top                  top
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at mid.y
//!    mid     \            mid   split
//!       \     \              \    \
//!         \    \               \   \
//!           \   \                \  \
//!              bot                  bot
//!
//!   General triangle      Flat-bottom (upper) + Flat-top (lower)
//! ```
//!
//! The split vertex lies on the `top -> bot` edge at parameter
//! `t = (mid.y - top.y) / (bot.y - top.y)`; its position, color and UV are
//! all interpolated at that same `t`. The shared row `y = mid.y` is drawn by
//! the flat-bottom half only, so no pixel is written twice.
//!
//! # Texture Coordinates
//!
//! Vertex UVs are derived from the triangle's axis-aligned bounding box:
//! `((x - min_x) / bbox_w, (y - min_y) / bbox_h)`. This is not a true
//! texture-space mapping and stretches textures on non-axis-aligned triangles;
//! it is the mapping this renderer has always used.
//!
//! # Degenerate Triangles
//!
//! Zero-height spans are skipped. A collinear triangle never fills an
//! interior but may still emit pixels along the edge that the split produces.

use std::ops::RangeInclusive;

use super::shader::{SpanEnd, SpanShader};
use super::Triangle;
use crate::colors::{lerp, lerp_color, Color};
use crate::config::FillMode;
use crate::error::RasterError;
use crate::math::vec2::Vec2;
use crate::point::Point;
use crate::render::pixel_buffer::RenderTarget;
use crate::texture::Texture;

/// A triangle vertex prepared for scanline interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Vertex {
    pos: Vec2,
    color: Color,
    uv: Vec2,
}

impl Vertex {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            pos: self.pos.lerp(other.pos, t),
            color: lerp_color(self.color, other.color, t),
            uv: self.uv.lerp(other.uv, t),
        }
    }
}

/// Parameter of row `y` along the edge `a -> b`, 0 when the edge is horizontal.
#[inline]
fn edge_param(a: &Vertex, b: &Vertex, y: f32) -> f32 {
    let height = b.pos.y - a.pos.y;
    if height == 0.0 {
        0.0
    } else {
        (y - a.pos.y) / height
    }
}

/// The part of `first..=last` that lies on a target axis of length `extent`.
fn clip_range(first: i64, last: i64, extent: u32) -> RangeInclusive<i32> {
    let first = first.max(0);
    let last = last.min(extent as i64 - 1).min(i32::MAX as i64);
    if first > last {
        return 1..=0;
    }
    first as i32..=last as i32
}

/// Scanline-based triangle rasterizer.
///
/// Supports flat shading (first vertex color), smooth shading (per-vertex
/// color interpolation) and bilinear-filtered texture fill. Vertices can be
/// given in any order.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by Y coordinate (ascending).
    ///
    /// Only strictly smaller values are swapped, so vertices sharing a Y keep
    /// their input order.
    fn sort_vertices(v0: &mut Vertex, v1: &mut Vertex, v2: &mut Vertex) {
        if v1.pos.y < v0.pos.y {
            std::mem::swap(v0, v1);
        }
        if v2.pos.y < v1.pos.y {
            std::mem::swap(v1, v2);
        }
        if v1.pos.y < v0.pos.y {
            std::mem::swap(v0, v1);
        }
    }

    /// Builds vertices with UVs normalized to the triangle's bounding box.
    ///
    /// `place` maps each point to its position on the target. UVs always come
    /// from the points' own coordinates.
    fn prepare_vertices(triangle: &Triangle, place: impl Fn(&Point) -> Vec2) -> [Vertex; 3] {
        let [p0, p1, p2] = triangle.points.map(|p| (p.x as i64, p.y as i64));
        let min_x = p0.0.min(p1.0).min(p2.0);
        let max_x = p0.0.max(p1.0).max(p2.0);
        let min_y = p0.1.min(p1.1).min(p2.1);
        let max_y = p0.1.max(p1.1).max(p2.1);

        // Guard the divisions for zero-width or zero-height boxes
        let bbox_w = (max_x - min_x).max(1) as f32;
        let bbox_h = (max_y - min_y).max(1) as f32;

        triangle.points.map(|p| Vertex {
            pos: place(&p),
            color: p.color,
            uv: Vec2::new(
                (p.x as i64 - min_x) as f32 / bbox_w,
                (p.y as i64 - min_y) as f32 / bbox_h,
            ),
        })
    }

    /// Fills a flat-bottom triangle.
    ///
    /// ```text
    ///        v0 (top)
    ///        /\
    ///       /  \
    ///      /____\
    ///    v1      v2  (same Y)
    /// ```
    fn fill_flat_bottom<T: RenderTarget>(
        v0: Vertex,
        v1: Vertex,
        v2: Vertex,
        shader: &SpanShader<'_>,
        target: &mut T,
    ) {
        if v2.pos.y - v0.pos.y == 0.0 {
            return; // Degenerate triangle (zero height)
        }
        let rows = (v0.pos.y.ceil() as i64, v2.pos.y.floor() as i64);
        Self::fill_rows((v0, v1), (v0, v2), rows, shader, target);
    }

    /// Fills a flat-top triangle.
    ///
    /// ```text
    ///   v0______v1  (same Y)
    ///     \    /
    ///      \  /
    ///       \/
    ///       v2 (bottom)
    /// ```
    ///
    /// `skip_top_row` leaves out the row at `v0.y` when it was already drawn
    /// by the flat-bottom half of a split triangle.
    fn fill_flat_top<T: RenderTarget>(
        v0: Vertex,
        v1: Vertex,
        v2: Vertex,
        skip_top_row: bool,
        shader: &SpanShader<'_>,
        target: &mut T,
    ) {
        if v2.pos.y - v0.pos.y == 0.0 {
            return;
        }
        let mut y_start = v0.pos.y.ceil() as i64;
        if skip_top_row {
            y_start += 1;
        }
        let rows = (y_start, v2.pos.y.floor() as i64);
        Self::fill_rows((v0, v2), (v1, v2), rows, shader, target);
    }

    /// Walks `rows`, filling between the x positions of `edge_a` and `edge_b`.
    ///
    /// For every row the x, color and UV of both edges are interpolated at the
    /// row's parameter along each edge. The span is then walked left to right
    /// from `ceil(x_left)` to `floor(x_right)` with
    /// `alpha = (x - x_left) / max(1, x_right - x_left)`. Rows and columns
    /// outside the target are skipped without being walked.
    fn fill_rows<T: RenderTarget>(
        edge_a: (Vertex, Vertex),
        edge_b: (Vertex, Vertex),
        rows: (i64, i64),
        shader: &SpanShader<'_>,
        target: &mut T,
    ) {
        for y in clip_range(rows.0, rows.1, target.height()) {
            let yf = y as f32;
            let ta = edge_param(&edge_a.0, &edge_a.1, yf);
            let tb = edge_param(&edge_b.0, &edge_b.1, yf);

            let mut x_left = lerp(edge_a.0.pos.x, edge_a.1.pos.x, ta);
            let mut x_right = lerp(edge_b.0.pos.x, edge_b.1.pos.x, tb);
            let mut left = SpanEnd {
                color: lerp_color(edge_a.0.color, edge_a.1.color, ta),
                uv: edge_a.0.uv.lerp(edge_a.1.uv, ta),
            };
            let mut right = SpanEnd {
                color: lerp_color(edge_b.0.color, edge_b.1.color, tb),
                uv: edge_b.0.uv.lerp(edge_b.1.uv, tb),
            };

            if x_left > x_right {
                std::mem::swap(&mut x_left, &mut x_right);
                std::mem::swap(&mut left, &mut right);
            }

            let span = (x_right - x_left).max(1.0);

            let columns = (x_left.ceil() as i64, x_right.floor() as i64);
            for x in clip_range(columns.0, columns.1, target.width()) {
                let alpha = (x as f32 - x_left) / span;
                target.plot(x, y, shader.shade(&left, &right, alpha));
            }
        }
    }

    /// Fills a triangle using the scanline algorithm.
    ///
    /// # Errors
    /// [`RasterError::MissingTexture`] if `mode` is [`FillMode::Textured`] and
    /// no texture is given. Nothing is drawn in that case.
    pub fn fill_triangle<T: RenderTarget>(
        &self,
        triangle: &Triangle,
        mode: FillMode,
        texture: Option<&Texture>,
        target: &mut T,
    ) -> Result<(), RasterError> {
        self.fill_placed(triangle, mode, texture, target, |p| {
            Vec2::new(p.x as f32, p.y as f32)
        })
    }

    /// [`fill_triangle`](Self::fill_triangle) with vertex positions given by
    /// `place`, for targets whose coordinates are a scaled copy of the
    /// triangle's own.
    pub(crate) fn fill_placed<T: RenderTarget>(
        &self,
        triangle: &Triangle,
        mode: FillMode,
        texture: Option<&Texture>,
        target: &mut T,
        place: impl Fn(&Point) -> Vec2,
    ) -> Result<(), RasterError> {
        let shader = SpanShader::for_mode(mode, triangle.points[0].color, texture)?;

        let [mut top, mut mid, mut bot] = Self::prepare_vertices(triangle, place);
        Self::sort_vertices(&mut top, &mut mid, &mut bot);

        // Case 1: Already a flat-bottom triangle
        if mid.pos.y == bot.pos.y {
            log::trace!("Flat-bottom fill, rows {}..={}", top.pos.y, bot.pos.y);
            Self::fill_flat_bottom(top, mid, bot, &shader, target);
            return Ok(());
        }

        // Case 2: Already a flat-top triangle
        if top.pos.y == mid.pos.y {
            log::trace!("Flat-top fill, rows {}..={}", top.pos.y, bot.pos.y);
            Self::fill_flat_top(top, mid, bot, false, &shader, target);
            return Ok(());
        }

        // Case 3: General triangle - split into flat-bottom + flat-top
        let t = (mid.pos.y - top.pos.y) / (bot.pos.y - top.pos.y);
        let mut split = top.lerp(bot, t);
        split.pos.y = mid.pos.y;
        log::trace!(
            "Split fill at y = {} (t = {}, split x = {})",
            mid.pos.y,
            t,
            split.pos.x
        );

        Self::fill_flat_bottom(top, mid, split, &shader, target);
        Self::fill_flat_top(mid, split, bot, true, &shader, target);
        Ok(())
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::pixel_buffer::PixelBuffer;
    use approx::assert_abs_diff_eq;
    use std::collections::HashMap;

    /// Counts writes per pixel.
    #[derive(Default)]
    struct WriteCounter(HashMap<(i32, i32), u32>);

    impl RenderTarget for WriteCounter {
        fn width(&self) -> u32 {
            u32::MAX
        }

        fn height(&self) -> u32 {
            u32::MAX
        }

        fn plot(&mut self, x: i32, y: i32, _color: Color) {
            *self.0.entry((x, y)).or_default() += 1;
        }
    }

    fn tri(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Triangle {
        Triangle::new(
            Point::new(a.0, a.1, Color::RED),
            Point::new(b.0, b.1, Color::GREEN),
            Point::new(c.0, c.1, Color::BLUE),
        )
    }

    fn prepare(triangle: &Triangle) -> [Vertex; 3] {
        ScanlineRasterizer::prepare_vertices(triangle, |p| Vec2::new(p.x as f32, p.y as f32))
    }

    fn writes(triangle: &Triangle) -> WriteCounter {
        let mut counter = WriteCounter::default();
        ScanlineRasterizer::new()
            .fill_triangle(triangle, FillMode::Flat, None, &mut counter)
            .unwrap();
        counter
    }

    #[test]
    fn sort_is_ascending_and_stable() {
        let triangle = tri((0, 5), (3, 0), (9, 0));
        let [mut a, mut b, mut c] = prepare(&triangle);
        ScanlineRasterizer::sort_vertices(&mut a, &mut b, &mut c);
        assert_eq!(a.pos, Vec2::new(3.0, 0.0));
        assert_eq!(b.pos, Vec2::new(9.0, 0.0));
        assert_eq!(c.pos, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn bounding_box_uvs() {
        let [a, b, c] = prepare(&tri((2, 2), (12, 2), (7, 7)));
        assert_eq!(a.uv, Vec2::new(0.0, 0.0));
        assert_eq!(b.uv, Vec2::new(1.0, 0.0));
        assert_eq!(c.uv, Vec2::new(0.5, 1.0));
    }

    #[test]
    fn flat_bottom_covers_expected_rows() {
        // Apex at the top of the row range, base on y = 4
        let counter = writes(&tri((4, 0), (0, 4), (8, 4)));
        for y in 0..=4 {
            for x in (4 - y)..=(4 + y) {
                assert_eq!(counter.0.get(&(x, y)), Some(&1), "pixel ({x}, {y})");
            }
        }
        assert_eq!(counter.0.len(), (0..=4).map(|y| 2 * y as usize + 1).sum::<usize>());
    }

    #[test]
    fn flat_top_covers_expected_rows() {
        let counter = writes(&tri((0, 0), (8, 0), (4, 4)));
        for y in 0..=4 {
            for x in y..=(8 - y) {
                assert!(counter.0.contains_key(&(x, y)), "pixel ({x}, {y})");
            }
        }
        assert!(!counter.0.contains_key(&(0, 1)));
    }

    #[test]
    fn split_triangle_never_writes_twice() {
        let counter = writes(&tri((0, 0), (10, 4), (3, 9)));
        assert!(!counter.0.is_empty());
        assert!(counter.0.values().all(|&n| n == 1));
        // The split row is covered
        assert!(counter.0.keys().any(|&(_, y)| y == 4));
    }

    #[test]
    fn zero_height_triangle_draws_nothing() {
        let counter = writes(&tri((0, 3), (5, 3), (10, 3)));
        assert!(counter.0.is_empty());
    }

    #[test]
    fn diagonal_collinear_triangle_draws_its_edge() {
        let counter = writes(&tri((0, 0), (5, 5), (10, 10)));
        let mut pixels: Vec<_> = counter.0.keys().copied().collect();
        pixels.sort();
        let expected: Vec<_> = (0..=10).map(|i| (i, i)).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn far_off_screen_triangles_are_clipped() {
        let far = 1_500_000_000;
        let rasterizer = ScanlineRasterizer::new();

        let mut sliver = PixelBuffer::new(16, 16);
        rasterizer
            .fill_triangle(&tri((-far, 0), (far, 0), (0, 1)), FillMode::Flat, None, &mut sliver)
            .unwrap();
        for x in 0..16 {
            assert_eq!(sliver.get_rgb8(x, 0), Some([255, 0, 0]), "row 0 at {x}");
            assert_eq!(sliver.get_rgb8(x, 2), Some([0, 0, 0]));
        }
        assert_eq!(sliver.get_rgb8(0, 1), Some([255, 0, 0]));
        assert_eq!(sliver.get_rgb8(1, 1), Some([0, 0, 0]));

        let mut covered = PixelBuffer::new(16, 16);
        let huge = tri((-far, -far), (far, -far), (0, far));
        rasterizer
            .fill_triangle(&huge, FillMode::Flat, None, &mut covered)
            .unwrap();
        assert_eq!(covered, PixelBuffer::new_filled(16, 16, Color::RED));
    }

    #[test]
    fn missing_texture_fails_without_drawing() {
        let mut buffer = PixelBuffer::new(8, 8);
        let result = ScanlineRasterizer::new().fill_triangle(
            &tri((0, 0), (7, 0), (3, 7)),
            FillMode::Textured,
            None,
            &mut buffer,
        );
        assert!(matches!(result, Err(RasterError::MissingTexture)));
        assert_eq!(buffer, PixelBuffer::new(8, 8));
    }

    #[test]
    fn flat_fill_uses_first_given_vertex() {
        let mut buffer = PixelBuffer::new(12, 12);
        // First vertex is not the top one after sorting
        let triangle = Triangle::new(
            Point::new(5, 10, Color::YELLOW),
            Point::new(0, 0, Color::RED),
            Point::new(10, 0, Color::BLUE),
        );
        ScanlineRasterizer::new()
            .fill_triangle(&triangle, FillMode::Flat, None, &mut buffer)
            .unwrap();
        assert_eq!(buffer.get_rgb8(5, 3), Some([255, 255, 0]));
        assert_eq!(buffer.get_rgb8(0, 0), Some([255, 255, 0]));
    }

    #[test]
    fn smooth_fill_hits_vertex_colors() {
        let mut buffer = PixelBuffer::new(12, 12);
        let triangle = Triangle::new(
            Point::new(0, 0, Color::RED),
            Point::new(10, 0, Color::GREEN),
            Point::new(5, 10, Color::BLUE),
        );
        ScanlineRasterizer::new()
            .fill_triangle(&triangle, FillMode::Smooth, None, &mut buffer)
            .unwrap();
        assert_eq!(buffer.get_rgb8(0, 0), Some([255, 0, 0]));
        assert_eq!(buffer.get_rgb8(10, 0), Some([0, 255, 0]));
        assert_eq!(buffer.get_rgb8(5, 10), Some([0, 0, 255]));

        let centroid = buffer.get_pixel(5, 3).unwrap();
        assert_abs_diff_eq!(centroid.r, 1.0 / 3.0, epsilon = 0.05);
        assert_abs_diff_eq!(centroid.g, 1.0 / 3.0, epsilon = 0.05);
        assert_abs_diff_eq!(centroid.b, 1.0 / 3.0, epsilon = 0.05);
    }

    #[test]
    fn textured_fill_samples_texture_corners() {
        #[rustfmt::skip]
        let bytes = [
            255, 0, 0,     0, 255, 0,
            0, 0, 255,     255, 255, 255,
        ];
        let texture = Texture::from_rgb_bytes(2, 2, &bytes).unwrap();
        let mut buffer = PixelBuffer::new(12, 12);
        let triangle = Triangle::new(
            Point::new(0, 0, Color::BLACK),
            Point::new(10, 0, Color::BLACK),
            Point::new(0, 10, Color::BLACK),
        );
        ScanlineRasterizer::new()
            .fill_triangle(&triangle, FillMode::Textured, Some(&texture), &mut buffer)
            .unwrap();
        // Bounding-box UVs put the corners on the corner texels
        assert_eq!(buffer.get_rgb8(0, 0), Some([255, 0, 0]));
        assert_eq!(buffer.get_rgb8(10, 0), Some([0, 255, 0]));
        assert_eq!(buffer.get_rgb8(0, 10), Some([0, 0, 255]));
    }
}
