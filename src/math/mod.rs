//! Small 2D math helpers used by the rasterizers.

pub mod vec2;
