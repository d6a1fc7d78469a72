//! Owned RGB pixel storage.
//!
//! [`PixelBuffer`] stores `width * height` 8-bit RGB samples with a
//! bottom-left origin. Rasterizers write through the [`RenderTarget`] trait so
//! the same line and triangle code can also draw into the supersampling
//! scratch target.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::colors::Color;
use crate::error::RasterError;

/// Anything a rasterizer can plot colored pixels into.
pub trait RenderTarget {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Write one pixel. Coordinates outside the target are ignored.
    fn plot(&mut self, x: i32, y: i32, color: Color);
}

/// A fixed-size 2D array of 8-bit RGB samples.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::new_filled(width, height, Color::BLACK)
    }

    pub fn new_filled(width: u32, height: u32, color: Color) -> Self {
        let mut buffer = Self {
            data: vec![0; width as usize * height as usize * 3],
            width,
            height,
        };
        buffer.clear(color);
        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Color) {
        let rgb = color.to_rgb8();
        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&rgb);
        }
    }

    /// Write a pixel, truncating each channel to 8 bits.
    ///
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.data[idx..idx + 3].copy_from_slice(&color.to_rgb8());
        }
    }

    /// Write a pixel, failing if `(x, y)` is outside the buffer.
    pub fn try_set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), RasterError> {
        if !self.in_bounds(x, y) {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel(x, y, color);
        Ok(())
    }

    /// Get the stored color at (x, y) as `channel / 255`, or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.get_rgb8(x, y).map(Color::from_rgb8)
    }

    /// Get the raw 8-bit samples at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_rgb8(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
        } else {
            None
        }
    }

    /// Row-major RGB bytes, bottom row first.
    pub fn as_rgb_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Encode the buffer as an image file (format chosen from the extension).
    ///
    /// Rows are flipped so the bottom-left origin ends up at the bottom of
    /// the written image.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RasterError> {
        let top = self.height as i32 - 1;
        let img = RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(self
                .get_rgb8(x as i32, top - y as i32)
                .unwrap_or([0, 0, 0]))
        });
        img.save(path.as_ref())?;
        log::info!(
            "Saved {}x{} buffer to {}",
            self.width,
            self.height,
            path.as_ref().display()
        );
        Ok(())
    }
}

impl RenderTarget for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.as_rgb_bytes().len(), 36);
        assert!(buffer.as_rgb_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn set_then_get() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set_pixel(2, 3, Color::new(1.0, 0.5, 0.0));
        assert_eq!(buffer.get_rgb8(2, 3), Some([255, 127, 0]));
        assert_eq!(buffer.get_pixel(2, 3), Some(Color::new(1.0, 127.0 / 255.0, 0.0)));
    }

    #[test]
    fn out_of_bounds_write_is_ignored() {
        let mut buffer = PixelBuffer::new(2, 2);
        let before = buffer.clone();
        buffer.set_pixel(-1, 0, Color::WHITE);
        buffer.set_pixel(0, 2, Color::WHITE);
        buffer.set_pixel(2, 0, Color::WHITE);
        assert_eq!(buffer, before);
    }

    #[test]
    fn try_set_pixel_reports_bounds() {
        let mut buffer = PixelBuffer::new(2, 2);
        assert!(buffer.try_set_pixel(1, 1, Color::WHITE).is_ok());
        assert!(matches!(
            buffer.try_set_pixel(5, 0, Color::WHITE),
            Err(RasterError::OutOfBounds { x: 5, y: 0, .. })
        ));
    }

    #[test]
    fn get_pixel_out_of_bounds_is_none() {
        let buffer = PixelBuffer::new(2, 2);
        assert_eq!(buffer.get_pixel(0, -1), None);
        assert_eq!(buffer.get_rgb8(2, 2), None);
    }

    #[test]
    fn clear_fills_everything() {
        let mut buffer = PixelBuffer::new(3, 3);
        buffer.clear(Color::BLUE);
        assert!(buffer.as_rgb_bytes().chunks_exact(3).all(|p| p == [0, 0, 255]));
    }
}
