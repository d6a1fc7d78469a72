//! Bilinear texture filtering.

use crate::colors::{lerp_color, Color};
use crate::texture::Texture;

/// Samples a [`Texture`] with bilinear filtering and edge-clamped addressing.
#[derive(Clone, Copy, Debug)]
pub struct TextureSampler<'a> {
    texture: &'a Texture,
}

impl<'a> TextureSampler<'a> {
    pub fn new(texture: &'a Texture) -> Self {
        Self { texture }
    }

    /// Sample at pixel-space coordinates `u` in `[0, width-1]`, `v` in `[0, height-1]`.
    ///
    /// The four surrounding texels are clamped independently to the texture
    /// edges (no wraparound), blended horizontally, then vertically. At integer
    /// coordinates this returns the texel itself.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let max_x = self.texture.width() as i32 - 1;
        let max_y = self.texture.height() as i32 - 1;

        let u0 = u.floor() as i32;
        let v0 = v.floor() as i32;
        let s = u - u0 as f32;
        let t = v - v0 as f32;

        let x0 = u0.clamp(0, max_x);
        let x1 = (u0 + 1).clamp(0, max_x);
        let y0 = v0.clamp(0, max_y);
        let y1 = (v0 + 1).clamp(0, max_y);

        let c00 = self.texture.texel(x0, y0);
        let c10 = self.texture.texel(x1, y0);
        let c01 = self.texture.texel(x0, y1);
        let c11 = self.texture.texel(x1, y1);

        let bottom = lerp_color(c00, c10, s);
        let top = lerp_color(c01, c11, s);
        lerp_color(bottom, top, t)
    }

    /// Sample at UVs normalized to `[0, 1]`, converting to pixel space first.
    #[inline]
    pub fn sample_normalized(&self, u: f32, v: f32) -> Color {
        self.sample(
            u * (self.texture.width() - 1) as f32,
            v * (self.texture.height() - 1) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn two_by_two() -> Texture {
        #[rustfmt::skip]
        let bytes = [
            0, 0, 0,       255, 0, 0,
            0, 255, 0,     255, 255, 255,
        ];
        Texture::from_rgb_bytes(2, 2, &bytes).unwrap()
    }

    #[test]
    fn integer_coordinates_return_exact_texel() {
        let texture = two_by_two();
        let sampler = TextureSampler::new(&texture);
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(sampler.sample(x as f32, y as f32), texture.texel(x, y));
            }
        }
    }

    #[test]
    fn center_blends_all_four() {
        let texture = two_by_two();
        let c = TextureSampler::new(&texture).sample(0.5, 0.5);
        assert_abs_diff_eq!(c.r, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(c.g, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(c.b, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn horizontal_blend_on_bottom_row() {
        let texture = two_by_two();
        let c = TextureSampler::new(&texture).sample(0.25, 0.0);
        assert_abs_diff_eq!(c.r, 0.25, epsilon = 1e-6);
        assert_abs_diff_eq!(c.g, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn out_of_range_coordinates_clamp_to_edge() {
        let texture = two_by_two();
        let sampler = TextureSampler::new(&texture);
        assert_eq!(sampler.sample(5.0, 5.0), texture.texel(1, 1));
        // floor(-2.5) = -3 with fraction 0.5, both neighbours clamp to column 0
        assert_eq!(sampler.sample(-2.5, 0.0), texture.texel(0, 0));
    }

    #[test]
    fn normalized_corners_hit_corner_texels() {
        let texture = Texture::checkerboard(5, 3, 1, Color::WHITE, Color::BLACK);
        let sampler = TextureSampler::new(&texture);
        assert_eq!(sampler.sample_normalized(0.0, 0.0), texture.texel(0, 0));
        assert_eq!(sampler.sample_normalized(1.0, 1.0), texture.texel(4, 2));
    }

    #[test]
    fn single_texel_texture() {
        let texture = Texture::from_rgb_bytes(1, 1, &[10, 20, 30]).unwrap();
        let sampler = TextureSampler::new(&texture);
        assert_eq!(sampler.sample_normalized(0.7, 0.2), texture.texel(0, 0));
    }
}
