use std::path::Path;

use crate::colors::Color;
use crate::error::RasterError;

/// Represents a read-only 2D texture for texture mapping.
///
/// Texels are stored with a bottom-left origin, matching [`PixelBuffer`].
/// A texture is built once and never mutated afterwards, so it can be shared
/// by reference across any number of fills.
///
/// [`PixelBuffer`]: crate::PixelBuffer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Texture {
    data: Vec<[u8; 3]>, // Row-major RGB texels, bottom row first.
    width: u32,
    height: u32,
}

impl Texture {
    /// Build a texture from decoded RGB bytes.
    ///
    /// `bytes` must hold `width * height * 3` values, already flipped so the
    /// first row is the bottom of the image.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyTexture);
        }
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(RasterError::TextureSize {
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect();

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Load a texture from an image file (PNG, JPG, etc.)
    ///
    /// Decoded images have a top-left origin, so rows are flipped on load.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RasterError> {
        let mut img = image::open(path.as_ref())?.to_rgb8();
        image::imageops::flip_vertical_in_place(&mut img);
        let (width, height) = img.dimensions();

        let texture = Self::from_rgb_bytes(width, height, img.as_raw())?;
        log::info!(
            "Texture loaded from {} with size {}x{}",
            path.as_ref().display(),
            width,
            height
        );
        Ok(texture)
    }

    /// Procedural checkerboard with square cells of `cell` texels.
    ///
    /// Zero dimensions are bumped to one texel.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: Color, b: Color) -> Self {
        let (width, height, cell) = (width.max(1), height.max(1), cell.max(1));
        let (a, b) = (a.to_rgb8(), b.to_rgb8());
        let data = (0..height)
            .flat_map(|y| {
                (0..width).map(move |x| if (x / cell + y / cell) % 2 == 0 { a } else { b })
            })
            .collect();

        Self {
            data,
            width,
            height,
        }
    }

    /// Fetch the texel at integer coordinates.
    ///
    /// Coordinates outside the texture are clamped to the nearest edge.
    #[inline]
    pub fn texel(&self, x: i32, y: i32) -> Color {
        let cx = x.clamp(0, self.width as i32 - 1);
        let cy = y.clamp(0, self.height as i32 - 1);
        if cx != x || cy != y {
            log::warn!(
                "Texel query ({}, {}) outside {}x{} texture, clamped",
                x,
                y,
                self.width,
                self.height
            );
        }
        Color::from_rgb8(self.data[cy as usize * self.width as usize + cx as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgb_bytes_rejects_wrong_length() {
        let err = Texture::from_rgb_bytes(2, 2, &[0; 11]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::TextureSize {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn from_rgb_bytes_rejects_empty() {
        assert!(matches!(
            Texture::from_rgb_bytes(0, 4, &[]),
            Err(RasterError::EmptyTexture)
        ));
    }

    #[test]
    fn texel_reads_row_major_bottom_first() {
        #[rustfmt::skip]
        let bytes = [
            255, 0, 0,   0, 255, 0,
            0, 0, 255,   255, 255, 255,
        ];
        let texture = Texture::from_rgb_bytes(2, 2, &bytes).unwrap();
        assert_eq!(texture.texel(0, 0), Color::RED);
        assert_eq!(texture.texel(1, 0), Color::GREEN);
        assert_eq!(texture.texel(0, 1), Color::BLUE);
        assert_eq!(texture.texel(1, 1), Color::WHITE);
    }

    #[test]
    fn texel_clamps_to_edges() {
        let texture = Texture::checkerboard(4, 4, 1, Color::WHITE, Color::BLACK);
        assert_eq!(texture.texel(-3, 0), texture.texel(0, 0));
        assert_eq!(texture.texel(9, 9), texture.texel(3, 3));
    }

    #[test]
    fn checkerboard_alternates_cells() {
        let texture = Texture::checkerboard(4, 4, 2, Color::WHITE, Color::BLACK);
        assert_eq!(texture.texel(0, 0), Color::WHITE);
        assert_eq!(texture.texel(1, 1), Color::WHITE);
        assert_eq!(texture.texel(2, 0), Color::BLACK);
        assert_eq!(texture.texel(2, 2), Color::WHITE);
    }
}
