//! Per-call rasterization options.

/// Flags controlling how lines and triangles are shaded.
///
/// Passed explicitly into every draw call instead of living on a long-lived
/// canvas object.
///
/// # Example
/// ```
/// use softraster::RasterConfig;
///
/// let config = RasterConfig::default().with_smooth(true).with_antialias(true, 2);
/// assert!(config.smooth);
/// assert_eq!(config.aa_level, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterConfig {
    /// Blend vertex colors per pixel instead of flat shading.
    pub smooth: bool,
    /// Supersample the primitive and average down onto the target.
    pub antialias: bool,
    /// Supersampling factor per axis, used only when `antialias` is set.
    pub aa_level: u32,
    /// Route triangle fills through the bound texture.
    pub texture: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            smooth: false,
            antialias: false,
            aa_level: 4,
            texture: false,
        }
    }
}

impl RasterConfig {
    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_antialias(mut self, antialias: bool, level: u32) -> Self {
        self.antialias = antialias;
        self.aa_level = level;
        self
    }

    pub fn with_texture(mut self, texture: bool) -> Self {
        self.texture = texture;
        self
    }

    /// The triangle fill strategy implied by these flags.
    ///
    /// Texturing takes precedence over smooth shading.
    pub fn fill_mode(&self) -> FillMode {
        if self.texture {
            FillMode::Textured
        } else if self.smooth {
            FillMode::Smooth
        } else {
            FillMode::Flat
        }
    }
}

/// How the interior of a triangle is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Every pixel takes the first vertex's color.
    #[default]
    Flat,
    /// Vertex colors are interpolated down the edges and across each span.
    Smooth,
    /// Bounding-box UVs are interpolated and bilinearly sampled from a texture.
    Textured,
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillMode::Flat => write!(f, "Flat"),
            FillMode::Smooth => write!(f, "Smooth"),
            FillMode::Textured => write!(f, "Textured"),
        }
    }
}
