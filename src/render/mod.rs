//! Drawing entry points.
//!
//! The free functions here take an explicit [`RasterConfig`] per call and
//! decide between drawing straight into the [`PixelBuffer`] and going through
//! the supersampling path.

pub mod line;
pub mod pixel_buffer;
pub mod rasterizer;
pub mod sampler;
pub mod supersample;

pub use line::LineRasterizer;
pub use pixel_buffer::{PixelBuffer, RenderTarget};
pub use rasterizer::{ScanlineRasterizer, Triangle};
pub use sampler::TextureSampler;

use crate::config::RasterConfig;
use crate::error::RasterError;
use crate::math::vec2::Vec2;
use crate::point::Point;
use crate::texture::Texture;

/// Write a single point.
pub fn draw_point(buffer: &mut PixelBuffer, point: Point) {
    buffer.set_pixel(point.x, point.y, point.color);
}

/// Draw a line segment from `p1` to `p2`.
///
/// With `config.antialias`, the segment is drawn `aa_level` subsamples wide
/// at `aa_level`x resolution and averaged down.
///
/// # Errors
/// [`RasterError::InvalidSupersampleLevel`] if anti-aliasing is enabled with
/// an unusable level.
pub fn draw_line(
    buffer: &mut PixelBuffer,
    p1: Point,
    p2: Point,
    config: &RasterConfig,
) -> Result<(), RasterError> {
    log::debug!(
        "Line ({}, {}) -> ({}, {}), smooth: {}, aa: {}",
        p1.x,
        p1.y,
        p2.x,
        p2.y,
        config.smooth,
        config.antialias
    );
    let rasterizer = LineRasterizer::new();

    if !config.antialias {
        rasterizer.draw_line(buffer, p1, p2, config.smooth);
        return Ok(());
    }

    let level = supersample::validate_level(config.aa_level)?;
    supersample::supersample(buffer, &[p1, p2], level, |band| {
        let mapping = band.mapping();
        let (ax, ay) = mapping.apply(p1.x, p1.y);
        let (bx, by) = mapping.apply(p2.x, p2.y);
        let steep = (by - ay).abs() > (bx - ax).abs();
        let half = band.level() as i64 / 2;

        // Parallel passes across the minor axis widen the line to one
        // destination pixel.
        for k in 0..band.level() as i64 {
            let offset = k - half;
            let (from, to) = if steep {
                ((ax + offset, ay, p1.color), (bx + offset, by, p2.color))
            } else {
                ((ax, ay + offset, p1.color), (bx, by + offset, p2.color))
            };
            rasterizer.draw_segment(band, from, to, config.smooth);
        }
        Ok(())
    })
}

/// Fill the triangle `p1, p2, p3`.
///
/// The fill mode comes from [`RasterConfig::fill_mode`]. Flat shading uses
/// `p1`'s color.
///
/// # Errors
/// - [`RasterError::MissingTexture`] if `config.texture` is set and `texture`
///   is None. Checked before anything is drawn.
/// - [`RasterError::InvalidSupersampleLevel`] for an unusable AA level.
pub fn draw_triangle(
    buffer: &mut PixelBuffer,
    p1: Point,
    p2: Point,
    p3: Point,
    config: &RasterConfig,
    texture: Option<&Texture>,
) -> Result<(), RasterError> {
    let mode = config.fill_mode();
    log::debug!(
        "Triangle ({}, {}) -> ({}, {}) -> ({}, {}), fill: {}, aa: {}",
        p1.x,
        p1.y,
        p2.x,
        p2.y,
        p3.x,
        p3.y,
        mode,
        config.antialias
    );
    if config.texture && texture.is_none() {
        return Err(RasterError::MissingTexture);
    }

    let rasterizer = ScanlineRasterizer::new();
    let triangle = Triangle::new(p1, p2, p3);

    if !config.antialias {
        return rasterizer.fill_triangle(&triangle, mode, texture, buffer);
    }

    let level = supersample::validate_level(config.aa_level)?;
    supersample::supersample(buffer, &triangle.points, level, |band| {
        let mapping = band.mapping();
        rasterizer.fill_placed(&triangle, mode, texture, band, |p| {
            let (x, y) = mapping.apply(p.x, p.y);
            Vec2::new(x as f32, y as f32)
        })
    })
}
