//! A CPU-only 2D rasterizer.
//!
//! This crate draws Bresenham lines and scanline-filled triangles straight
//! into an owned RGB [`PixelBuffer`]. Triangles can be flat shaded, smooth
//! shaded from per-vertex colors, or filled from a bilinearly filtered
//! [`Texture`]. An optional supersampling pass anti-aliases either primitive.
//!
//! The buffer uses a bottom-left origin. Writes outside it are clipped.
//!
//! # Quick Start
//!
//! ```
//! use softraster::prelude::*;
//!
//! let mut buffer = PixelBuffer::new(64, 64);
//! let config = RasterConfig::default().with_smooth(true);
//!
//! draw_line(
//!     &mut buffer,
//!     Point::new(0, 0, Color::RED),
//!     Point::new(10, 0, Color::BLUE),
//!     &config,
//! )?;
//! draw_triangle(
//!     &mut buffer,
//!     Point::new(10, 10, Color::RED),
//!     Point::new(50, 10, Color::GREEN),
//!     Point::new(30, 50, Color::BLUE),
//!     &config,
//!     None,
//! )?;
//! # Ok::<(), softraster::RasterError>(())
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod error;
pub mod math;
pub mod point;
pub mod render;
pub mod scenes;
pub mod texture;

// Re-export commonly needed types at crate root for convenience
pub use colors::Color;
pub use config::{FillMode, RasterConfig};
pub use error::RasterError;
pub use point::Point;
pub use render::{draw_line, draw_point, draw_triangle, PixelBuffer, RenderTarget};
pub use scenes::Scene;
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use softraster::prelude::*;
/// ```
pub mod prelude {
    // Values
    pub use crate::colors::{lerp_color, Color};
    pub use crate::point::Point;

    // Options
    pub use crate::config::{FillMode, RasterConfig};

    // Storage
    pub use crate::render::PixelBuffer;
    pub use crate::texture::Texture;

    // Drawing
    pub use crate::render::{draw_line, draw_point, draw_triangle};
    pub use crate::render::{TextureSampler, Triangle};
}

/// Module exposing the rasterizers directly for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{LineRasterizer, PixelBuffer, ScanlineRasterizer, Triangle};
}
