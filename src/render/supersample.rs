//! Supersample-then-average anti-aliasing.
//!
//! A primitive is drawn at `level`x resolution into a [`SupersampleTarget`]
//! that covers only the primitive's bounding box, then each destination
//! pixel is replaced by the average of its `level * level` subsamples.
//! Subsamples the primitive did not touch contribute the destination's
//! existing color, so edges blend into whatever is already in the buffer.
//!
//! The bounding box is processed in bands of destination rows so that no
//! more than [`BAND_SAMPLES`] subsamples are held at once, however large the
//! primitive or the level. The primitive is redrawn for every band and the
//! rasterizers skip the rows that fall outside it.

use crate::colors::Color;
use crate::error::RasterError;
use crate::point::Point;

use super::pixel_buffer::{PixelBuffer, RenderTarget};

/// Largest accepted supersampling factor per axis.
pub const MAX_SUPERSAMPLE_LEVEL: u32 = 16;

/// Subsamples held per band, unless a single destination row needs more.
const BAND_SAMPLES: usize = 1 << 20;

/// Check a supersampling factor.
pub fn validate_level(level: u32) -> Result<u32, RasterError> {
    if (1..=MAX_SUPERSAMPLE_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(RasterError::InvalidSupersampleLevel(level))
    }
}

/// Draw a primitive through supersampled bands and average it into `buffer`.
///
/// `points` bound the primitive. `draw` is called once per band and should
/// draw the whole primitive into the band it is given.
pub(crate) fn supersample<F>(
    buffer: &mut PixelBuffer,
    points: &[Point],
    level: u32,
    mut draw: F,
) -> Result<(), RasterError>
where
    F: FnMut(&mut SupersampleTarget) -> Result<(), RasterError>,
{
    let Some((min_x, min_y, max_x, max_y)) = clipped_bounds(buffer, points) else {
        return Ok(());
    };
    let cols = (max_x - min_x + 1) as u32;
    let rows_per_band = band_rows(cols, level);

    let mut band = SupersampleTarget::new(min_x, min_y, cols, 0, level);
    let mut y = min_y;
    while y <= max_y {
        let rows = rows_per_band.min((max_y - y + 1) as u32);
        band.start_band(y, rows);
        draw(&mut band)?;
        band.resolve(buffer);
        y += rows as i32;
    }
    Ok(())
}

/// Bounding box of `points` clipped to `buffer`, or None when nothing is left.
fn clipped_bounds(buffer: &PixelBuffer, points: &[Point]) -> Option<(i32, i32, i32, i32)> {
    let min_x = points.iter().map(|p| p.x).min()?.max(0);
    let min_y = points.iter().map(|p| p.y).min()?.max(0);
    let max_x = points.iter().map(|p| p.x).max()?.min(buffer.width() as i32 - 1);
    let max_y = points.iter().map(|p| p.y).max()?.min(buffer.height() as i32 - 1);
    if min_x > max_x || min_y > max_y {
        return None;
    }
    Some((min_x, min_y, max_x, max_y))
}

/// Destination rows per band for a box `cols` pixels wide.
fn band_rows(cols: u32, level: u32) -> u32 {
    let per_row = (cols as usize * (level * level) as usize).max(1);
    (BAND_SAMPLES / per_row).clamp(1, u32::MAX as usize) as u32
}

/// Maps destination pixels to the center subsample of a band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SubsampleMap {
    origin_x: i64,
    origin_y: i64,
    level: i64,
}

impl SubsampleMap {
    /// Band coordinates of destination pixel `(x, y)`.
    ///
    /// Far off-screen points stay representable; the rasterizers clip them.
    pub fn apply(&self, x: i32, y: i32) -> (i64, i64) {
        (
            (x as i64 - self.origin_x) * self.level + self.level / 2,
            (y as i64 - self.origin_y) * self.level + self.level / 2,
        )
    }
}

/// High-resolution scratch target with per-subsample coverage.
pub(crate) struct SupersampleTarget {
    origin_x: i32,
    origin_y: i32,
    cols: u32,
    rows: u32,
    level: u32,
    samples: Vec<Option<Color>>,
}

impl SupersampleTarget {
    fn new(origin_x: i32, origin_y: i32, cols: u32, rows: u32, level: u32) -> Self {
        let mut target = Self {
            origin_x,
            origin_y,
            cols,
            rows: 0,
            level,
            samples: Vec::new(),
        };
        target.start_band(origin_y, rows);
        target
    }

    /// Move to `rows` destination rows starting at `origin_y`, all uncovered.
    fn start_band(&mut self, origin_y: i32, rows: u32) {
        self.origin_y = origin_y;
        self.rows = rows;
        let len = (self.cols * self.level) as usize * (rows * self.level) as usize;
        self.samples.clear();
        self.samples.resize(len, None);
    }

    pub fn mapping(&self) -> SubsampleMap {
        SubsampleMap {
            origin_x: self.origin_x as i64,
            origin_y: self.origin_y as i64,
            level: self.level as i64,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Average the subsamples down into `buffer`.
    ///
    /// Pixels with no covered subsample are left untouched.
    fn resolve(&self, buffer: &mut PixelBuffer) {
        let level = self.level as usize;
        let stride = self.cols as usize * level;
        let total = (level * level) as f32;

        for py in 0..self.rows as usize {
            for px in 0..self.cols as usize {
                let mut sum = Color::BLACK;
                let mut covered = 0usize;
                for sy in 0..level {
                    let row = (py * level + sy) * stride;
                    for sx in 0..level {
                        if let Some(c) = self.samples[row + px * level + sx] {
                            sum = sum + c;
                            covered += 1;
                        }
                    }
                }
                if covered == 0 {
                    continue;
                }

                let x = self.origin_x + px as i32;
                let y = self.origin_y + py as i32;
                let background = buffer.get_pixel(x, y).unwrap_or(Color::BLACK);
                let uncovered = (level * level - covered) as f32;
                buffer.set_pixel(x, y, (sum + background * uncovered) * (1.0 / total));
            }
        }
    }
}

impl RenderTarget for SupersampleTarget {
    fn width(&self) -> u32 {
        self.cols * self.level
    }

    fn height(&self) -> u32 {
        self.rows * self.level
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        if x >= 0 && x < w && y >= 0 && y < h {
            self.samples[(y * w + x) as usize] = Some(color);
        }
    }
}
