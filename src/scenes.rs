//! Demonstration scenes.
//!
//! Each scene exercises one part of the rasterizer: smooth lines in every
//! direction, a closed curve of short segments, flat and smooth triangle
//! fans, and a textured fan.

use std::f32::consts::PI;
use std::str::FromStr;

use crate::colors::Color;
use crate::config::RasterConfig;
use crate::error::RasterError;
use crate::point::Point;
use crate::render::{draw_line, draw_triangle, PixelBuffer};
use crate::texture::Texture;

pub const MIN_STEPS: u32 = 6;
pub const MAX_STEPS: u32 = 192;
pub const DEFAULT_STEPS: u32 = 12;

/// The available demonstration scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Smooth-shaded lines radiating from the center in all directions.
    #[default]
    LineStar,
    /// A petal curve and an inner circle built from short segments.
    LinePetals,
    /// A fan of flat-shaded triangles.
    FlatFan,
    /// A fan of smooth-shaded triangles.
    SmoothFan,
    /// A fan of textured triangles.
    TexturedFan,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::LineStar,
        Scene::LinePetals,
        Scene::FlatFan,
        Scene::SmoothFan,
        Scene::TexturedFan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scene::LineStar => "line-star",
            Scene::LinePetals => "line-petals",
            Scene::FlatFan => "flat-fan",
            Scene::SmoothFan => "smooth-fan",
            Scene::TexturedFan => "textured-fan",
        }
    }

    /// Draw the scene into `buffer`.
    ///
    /// `n_steps` is clamped to [`MIN_STEPS`, `MAX_STEPS`]. The line scenes
    /// draw with `config` as given. The fans pick their own fill mode and use
    /// only the anti-aliasing flags. `texture` is required by
    /// [`Scene::TexturedFan`].
    pub fn render(
        &self,
        buffer: &mut PixelBuffer,
        n_steps: u32,
        config: &RasterConfig,
        texture: Option<&Texture>,
    ) -> Result<(), RasterError> {
        let n_steps = n_steps.clamp(MIN_STEPS, MAX_STEPS);
        log::info!("Rendering {} with {} steps", self.name(), n_steps);
        match self {
            Scene::LineStar => line_star(buffer, n_steps, config),
            Scene::LinePetals => line_petals(buffer, n_steps, config),
            Scene::FlatFan => triangle_fan(buffer, n_steps, &config.with_smooth(false)),
            Scene::SmoothFan => triangle_fan(buffer, n_steps, &config.with_smooth(true)),
            Scene::TexturedFan => textured_fan(buffer, n_steps, config, texture),
        }
    }
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scene::ALL
            .into_iter()
            .find(|scene| scene.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Scene::ALL.iter().map(Scene::name).collect();
                format!("unknown scene '{s}', expected one of: {}", names.join(", "))
            })
    }
}

fn center(buffer: &PixelBuffer) -> (i32, i32) {
    (buffer.width() as i32 / 2, buffer.height() as i32 / 2)
}

fn line_star(
    buffer: &mut PixelBuffer,
    n_steps: u32,
    config: &RasterConfig,
) -> Result<(), RasterError> {
    let (cx, cy) = center(buffer);
    let radius = buffer.width().min(buffer.height()) as f32 * 0.45;

    let hub = Point::new(cx, cy, Color::YELLOW);
    for step in 0..n_steps {
        let fade = 1.0 - step as f32 / n_steps as f32;
        let (sin, cos) = (PI * step as f32 / n_steps as f32).sin_cos();
        let (dx, dy) = ((sin * radius) as i32, (cos * radius) as i32);

        let forward = Point::new(cx + dx, cy + dy, Color::new(0.0, 0.0, fade));
        let backward = Point::new(cx - dx, cy - dy, Color::new(0.0, fade, 0.0));
        draw_line(buffer, backward, hub, config)?;
        draw_line(buffer, hub, forward, config)?;
    }
    Ok(())
}

fn line_petals(
    buffer: &mut PixelBuffer,
    n_steps: u32,
    config: &RasterConfig,
) -> Result<(), RasterError> {
    let n_steps = 2 * n_steps;
    let d_theta = 2.0 * PI / n_steps as f32;
    let d_petal = 12.0 * PI / n_steps as f32;
    let (cx, cy) = center(buffer);
    let radius = 0.75 * cx.min(cy) as f32;
    let petal = radius * 0.25;

    let petal_point = |i: u32| {
        let i = i as f32;
        let x = (0.5 + radius * (d_theta * i).sin() + petal * (d_petal * i).sin()).floor();
        let y = (0.5 + radius * (d_theta * i).cos() + petal * (d_petal * i).cos()).floor();
        let color = Color::new(
            1.0,
            (128.0 + (d_theta * i * 5.0).sin() * 127.0) / 255.0,
            (128.0 + (d_theta * i * 5.0).cos() * 127.0) / 255.0,
        );
        Point::new(x as i32 + cx, y as i32 + cy, color)
    };
    for i in 0..n_steps + 2 {
        draw_line(buffer, petal_point(i), petal_point(i + 1), config)?;
    }

    let orange = Color::new(1.0, 97.0 / 255.0, 0.0);
    let circle_point = |i: u32| {
        let theta = d_theta * i as f32;
        let x = (0.5 * radius * theta.sin()).floor() as i32;
        let y = (0.5 * radius * theta.cos()).floor() as i32;
        Point::new(x + cx, y + cy, orange)
    };
    for i in 0..n_steps + 1 {
        draw_line(buffer, circle_point(i), circle_point(i + 1), config)?;
    }
    Ok(())
}

/// Vertices of the fan wedges: the white hub, then two rim points per wedge.
fn fan_wedges(buffer: &PixelBuffer, n_steps: u32) -> Vec<[Point; 3]> {
    let wedges = (n_steps / 2).max(1);
    let delta = 2.0 * PI / wedges as f32;
    let radius = buffer.width().min(buffer.height()) as f32 * 0.45;
    let (cx, cy) = center(buffer);

    let rim = |theta: f32| {
        let color = Color::new(
            (127.0 + 127.0 * theta.sin()) / 255.0,
            (127.0 + 127.0 * (theta + 2.0 * PI / 3.0).sin()) / 255.0,
            (127.0 + 127.0 * (theta + 4.0 * PI / 3.0).sin()) / 255.0,
        );
        Point::new(
            (cx as f32 + theta.sin() * radius) as i32,
            (cy as f32 + theta.cos() * radius) as i32,
            color,
        )
    };

    (1..=wedges)
        .map(|k| {
            let theta = delta * k as f32;
            [Point::new(cx, cy, Color::WHITE), rim(theta), rim(theta + delta)]
        })
        .collect()
}

fn triangle_fan(
    buffer: &mut PixelBuffer,
    n_steps: u32,
    config: &RasterConfig,
) -> Result<(), RasterError> {
    let config = config.with_texture(false);
    for [hub, a, b] in fan_wedges(buffer, n_steps) {
        if config.smooth {
            draw_triangle(buffer, hub, a, b, &config, None)?;
        } else {
            // Lead with a rim vertex so each wedge gets its own flat color
            draw_triangle(buffer, a, hub, b, &config, None)?;
        }
    }
    Ok(())
}

fn textured_fan(
    buffer: &mut PixelBuffer,
    n_steps: u32,
    config: &RasterConfig,
    texture: Option<&Texture>,
) -> Result<(), RasterError> {
    let config = config.with_texture(true);
    for [hub, a, b] in fan_wedges(buffer, n_steps) {
        draw_triangle(buffer, hub, a, b, &config, texture)?;
    }
    Ok(())
}
