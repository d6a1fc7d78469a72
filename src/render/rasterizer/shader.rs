//! Per-pixel shading for scanline spans.
//!
//! The scanline walker interpolates colors and UVs down the two bounding
//! edges of each row; a [`SpanShader`] then turns the left/right edge values
//! and the horizontal progress `alpha` into the final pixel color.
//!
//! The shading strategy is picked once per triangle, so the inner loop is a
//! plain `match` on a small enum rather than a virtual call per pixel.

use crate::colors::{lerp_color, Color};
use crate::config::FillMode;
use crate::error::RasterError;
use crate::math::vec2::Vec2;
use crate::render::sampler::TextureSampler;
use crate::texture::Texture;

/// Color and UV of one end of a scanline span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SpanEnd {
    pub color: Color,
    pub uv: Vec2,
}

/// Shading strategy for the pixels of one triangle.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SpanShader<'a> {
    /// Every pixel gets the same color.
    Flat(Color),
    /// Interpolate the edge colors across the span.
    Smooth,
    /// Interpolate normalized UVs across the span and sample bilinearly.
    Textured(TextureSampler<'a>),
}

impl<'a> SpanShader<'a> {
    /// Select the shader for a fill mode.
    ///
    /// `flat_color` is the color of the triangle's first vertex as given by
    /// the caller (before any sorting).
    pub fn for_mode(
        mode: FillMode,
        flat_color: Color,
        texture: Option<&'a Texture>,
    ) -> Result<Self, RasterError> {
        match mode {
            FillMode::Flat => Ok(Self::Flat(flat_color)),
            FillMode::Smooth => Ok(Self::Smooth),
            FillMode::Textured => texture
                .map(|t| Self::Textured(TextureSampler::new(t)))
                .ok_or(RasterError::MissingTexture),
        }
    }

    #[inline]
    pub fn shade(&self, left: &SpanEnd, right: &SpanEnd, alpha: f32) -> Color {
        match self {
            SpanShader::Flat(color) => *color,
            SpanShader::Smooth => lerp_color(left.color, right.color, alpha),
            SpanShader::Textured(sampler) => {
                let uv = left.uv.lerp(right.uv, alpha);
                sampler.sample_normalized(uv.x, uv.y)
            }
        }
    }
}
