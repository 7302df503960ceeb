//! Scene lighting
//!
//! Light sources are fixed scene data: configured once during setup, staged
//! into the shader's `lightSources[i]` records, and never touched again
//! during the render loop.

use crate::foundation::math::Vec3;

/// Number of light-source slots in the shader program
pub const MAX_LIGHT_SOURCES: usize = 4;

/// One positional light source matching the shader's `lightSources[i]` record
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    /// World-space position
    pub position: Vec3,
    /// Ambient contribution color
    pub ambient_color: Vec3,
    /// Diffuse contribution color
    pub diffuse_color: Vec3,
    /// Specular contribution color
    pub specular_color: Vec3,
    /// Falloff exponent for the specular focal cone
    pub focal_strength: f32,
    /// Scalar multiplier on the specular contribution
    pub specular_intensity: f32,
}

impl LightSource {
    /// Create a white light at the given position
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ambient_color: Vec3::new(0.2, 0.2, 0.2),
            diffuse_color: Vec3::new(1.0, 1.0, 1.0),
            specular_color: Vec3::new(1.0, 1.0, 1.0),
            focal_strength: 1.0,
            specular_intensity: 1.0,
        }
    }

    /// Set the ambient color
    #[must_use]
    pub fn with_ambient(mut self, color: Vec3) -> Self {
        self.ambient_color = color;
        self
    }

    /// Set the diffuse color
    #[must_use]
    pub fn with_diffuse(mut self, color: Vec3) -> Self {
        self.diffuse_color = color;
        self
    }

    /// Set the specular color
    #[must_use]
    pub fn with_specular(mut self, color: Vec3) -> Self {
        self.specular_color = color;
        self
    }

    /// Set the focal strength
    #[must_use]
    pub const fn with_focal_strength(mut self, strength: f32) -> Self {
        self.focal_strength = strength;
        self
    }

    /// Set the specular intensity
    #[must_use]
    pub const fn with_specular_intensity(mut self, intensity: f32) -> Self {
        self.specular_intensity = intensity;
        self
    }
}

/// The set of configured lights, at most [`MAX_LIGHT_SOURCES`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightingEnvironment {
    sources: Vec<LightSource>,
}

impl LightingEnvironment {
    /// Create an environment with no lights
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a light source
    ///
    /// Sources past the shader's slot count are dropped with a warning.
    #[must_use]
    pub fn add_source(mut self, source: LightSource) -> Self {
        if self.sources.len() == MAX_LIGHT_SOURCES {
            log::warn!("all {MAX_LIGHT_SOURCES} light-source slots are in use; dropping light");
            return self;
        }
        self.sources.push(source);
        self
    }

    /// The configured light sources, in slot order
    #[must_use]
    pub fn sources(&self) -> &[LightSource] {
        &self.sources
    }
}
