//! Errors surfaced by the rasterization core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("texture fill requested but no texture is bound")]
    MissingTexture,
    #[error("pixel ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    #[error("texture data has {actual} bytes, expected {expected}")]
    TextureSize { expected: usize, actual: usize },
    #[error("texture must have a non-zero width and height")]
    EmptyTexture,
    #[error("invalid supersampling level: {0}")]
    InvalidSupersampleLevel(u32),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
