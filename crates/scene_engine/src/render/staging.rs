//! Shader uniform staging
//!
//! Staging is an immediate write into shared shader uniform state: no
//! batching, no dirty tracking. Every draw must be preceded by at least a
//! transform stage; color/texture, UV scale, and material stages are
//! optional per draw and, when omitted, the corresponding uniforms keep
//! whatever value the previous draw left behind. That stale-by-default
//! behavior avoids redundant uniform uploads and is part of the contract.
//!
//! The stager keeps an explicit [`ShaderState`] mirror of everything it has
//! written, so the current uniform state is inspectable without asking the
//! backend.

use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::backend::RenderBackend;
use crate::render::lighting::{LightSource, LightingEnvironment};
use crate::render::material::MaterialRegistry;
use crate::render::texture::TextureRegistry;

/// Uniform names: the wire contract between the stager and the shader
/// program. These must match the shader source exactly.
pub mod uniforms {
    /// Model matrix (mat4)
    pub const MODEL: &str = "model";
    /// Flat object color (vec4)
    pub const OBJECT_COLOR: &str = "objectColor";
    /// Sampler unit index (int)
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    /// Texture-versus-color selector (bool)
    pub const USE_TEXTURE: &str = "bUseTexture";
    /// Lighting enable flag (bool)
    pub const USE_LIGHTING: &str = "bUseLighting";
    /// Texture coordinate scale (vec2)
    pub const UV_SCALE: &str = "UVscale";
    /// Material ambient color (vec3)
    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    /// Material ambient strength (float)
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    /// Material diffuse color (vec3)
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    /// Material specular color (vec3)
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    /// Material specular exponent (float)
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// Uniform name for one field of the `lightSources` array
    #[must_use]
    pub fn light_source(index: usize, field: &str) -> String {
        format!("lightSources[{index}].{field}")
    }
}

/// Unit index staged when a texture tag cannot be resolved
///
/// The sentinel goes straight to the shader, which will then sample an
/// undefined or previously bound unit. A miss is silent visual corruption by
/// design, never an error.
pub const UNIT_NOT_FOUND: i32 = -1;

/// The five material fields mirrored into `material.*` uniforms
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialState {
    /// Ambient reflectance color
    pub ambient_color: Vec3,
    /// Ambient strength multiplier
    pub ambient_strength: f32,
    /// Diffuse reflectance color
    pub diffuse_color: Vec3,
    /// Specular reflectance color
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl Default for MaterialState {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::zeros(),
            ambient_strength: 0.0,
            diffuse_color: Vec3::zeros(),
            specular_color: Vec3::zeros(),
            shininess: 0.0,
        }
    }
}

/// Snapshot of every uniform the stager can write
///
/// Fields not touched by a staging call keep their previous value; the
/// mirror makes that staleness explicit and testable instead of hiding it in
/// backend state.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderState {
    /// Current model matrix
    pub model: Mat4,
    /// Current flat color
    pub object_color: Vec4,
    /// Current sampler unit index, [`UNIT_NOT_FOUND`] if unresolved
    pub texture_unit: i32,
    /// Whether the next draw samples a texture instead of the flat color
    pub use_texture: bool,
    /// Whether lighting is applied
    pub use_lighting: bool,
    /// Current texture coordinate scale
    pub uv_scale: Vec2,
    /// Currently staged material fields
    pub material: MaterialState,
    /// Light sources staged at setup, in slot order
    pub light_sources: Vec<LightSource>,
}

impl Default for ShaderState {
    fn default() -> Self {
        Self {
            model: Mat4::identity(),
            object_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            texture_unit: UNIT_NOT_FOUND,
            use_texture: false,
            use_lighting: false,
            uv_scale: Vec2::new(1.0, 1.0),
            material: MaterialState::default(),
            light_sources: Vec::new(),
        }
    }
}

/// Stager pushing values into the shader immediately before each draw
#[derive(Debug, Default)]
pub struct ShaderStage {
    state: ShaderState,
}

impl ShaderStage {
    /// Create a stager with default state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The mirror of everything staged so far
    #[must_use]
    pub const fn state(&self) -> &ShaderState {
        &self.state
    }

    /// Write the model matrix uniform
    pub fn stage_transform(&mut self, backend: &mut dyn RenderBackend, model: &Mat4) {
        self.state.model = *model;
        backend.set_mat4(uniforms::MODEL, model);
    }

    /// Write the flat color uniform and disable texturing
    ///
    /// Color and texture are mutually exclusive per draw, selected by the
    /// use-texture flag: staging a texture afterwards re-enables texturing,
    /// and nothing ever disables the color explicitly.
    pub fn stage_solid_color(
        &mut self,
        backend: &mut dyn RenderBackend,
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
    ) {
        self.state.use_texture = false;
        self.state.object_color = Vec4::new(red, green, blue, alpha);
        backend.set_bool(uniforms::USE_TEXTURE, false);
        backend.set_vec4(uniforms::OBJECT_COLOR, self.state.object_color);
    }

    /// Resolve `tag` against the texture registry and stage its unit index
    ///
    /// Enables texturing either way; a miss stages [`UNIT_NOT_FOUND`] and is
    /// logged, not raised.
    pub fn stage_texture(
        &mut self,
        backend: &mut dyn RenderBackend,
        textures: &TextureRegistry,
        tag: &str,
    ) {
        let unit = textures
            .unit(tag)
            .map_or(UNIT_NOT_FOUND, |unit| unit as i32);
        if unit == UNIT_NOT_FOUND {
            log::warn!("no texture registered under tag '{tag}'; staging sentinel unit");
        }

        self.state.use_texture = true;
        self.state.texture_unit = unit;
        backend.set_bool(uniforms::USE_TEXTURE, true);
        backend.set_int(uniforms::OBJECT_TEXTURE, unit);
    }

    /// Write the UV-scale uniform, independent of texture/color state
    pub fn stage_uv_scale(&mut self, backend: &mut dyn RenderBackend, u: f32, v: f32) {
        self.state.uv_scale = Vec2::new(u, v);
        backend.set_vec2(uniforms::UV_SCALE, self.state.uv_scale);
    }

    /// Resolve `tag` against the material registry and stage all five fields
    ///
    /// A miss performs no writes at all; the previously staged material
    /// persists into the next draw.
    pub fn stage_material(
        &mut self,
        backend: &mut dyn RenderBackend,
        materials: &MaterialRegistry,
        tag: &str,
    ) {
        let Some(material) = materials.lookup(tag) else {
            log::warn!("no material defined under tag '{tag}'; keeping previous material");
            return;
        };

        self.state.material = MaterialState {
            ambient_color: material.ambient_color,
            ambient_strength: material.ambient_strength,
            diffuse_color: material.diffuse_color,
            specular_color: material.specular_color,
            shininess: material.shininess,
        };
        backend.set_vec3(uniforms::MATERIAL_AMBIENT_COLOR, material.ambient_color);
        backend.set_float(
            uniforms::MATERIAL_AMBIENT_STRENGTH,
            material.ambient_strength,
        );
        backend.set_vec3(uniforms::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
        backend.set_vec3(uniforms::MATERIAL_SPECULAR_COLOR, material.specular_color);
        backend.set_float(uniforms::MATERIAL_SHININESS, material.shininess);
    }

    /// Write the lighting enable flag
    pub fn set_lighting_enabled(&mut self, backend: &mut dyn RenderBackend, enabled: bool) {
        self.state.use_lighting = enabled;
        backend.set_bool(uniforms::USE_LIGHTING, enabled);
    }

    /// Stage every configured light source into its `lightSources[i]` record
    ///
    /// Called once at scene setup; light uniforms are never rewritten during
    /// the render loop.
    pub fn stage_light_sources(
        &mut self,
        backend: &mut dyn RenderBackend,
        lighting: &LightingEnvironment,
    ) {
        for (index, source) in lighting.sources().iter().enumerate() {
            backend.set_vec3(&uniforms::light_source(index, "position"), source.position);
            backend.set_vec3(
                &uniforms::light_source(index, "ambientColor"),
                source.ambient_color,
            );
            backend.set_vec3(
                &uniforms::light_source(index, "diffuseColor"),
                source.diffuse_color,
            );
            backend.set_vec3(
                &uniforms::light_source(index, "specularColor"),
                source.specular_color,
            );
            backend.set_float(
                &uniforms::light_source(index, "focalStrength"),
                source.focal_strength,
            );
            backend.set_float(
                &uniforms::light_source(index, "specularIntensity"),
                source.specular_intensity,
            );
        }
        self.state.light_sources = lighting.sources().to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageData;
    use crate::render::headless::{HeadlessBackend, UniformValue};
    use crate::render::lighting::LightSource;
    use crate::render::material::Material;

    fn registry_with(tags: &[&str], backend: &mut HeadlessBackend) -> TextureRegistry {
        let mut registry = TextureRegistry::new();
        for tag in tags {
            registry
                .register_image(backend, &ImageData::solid_color(2, 2, [0, 0, 0, 255]), tag)
                .expect("register");
        }
        registry
    }

    #[test]
    fn stage_texture_miss_stages_sentinel_without_error() {
        let mut backend = HeadlessBackend::new();
        let textures = TextureRegistry::new();
        let mut stage = ShaderStage::new();

        stage.stage_texture(&mut backend, &textures, "missing-tag");

        assert!(stage.state().use_texture);
        assert_eq!(stage.state().texture_unit, UNIT_NOT_FOUND);
        assert_eq!(
            backend.uniform(uniforms::OBJECT_TEXTURE),
            Some(&UniformValue::Int(UNIT_NOT_FOUND))
        );
        assert_eq!(
            backend.uniform(uniforms::USE_TEXTURE),
            Some(&UniformValue::Bool(true))
        );
    }

    #[test]
    fn stage_texture_resolves_registered_unit() {
        let mut backend = HeadlessBackend::new();
        let textures = registry_with(&["wood", "metal"], &mut backend);
        let mut stage = ShaderStage::new();

        stage.stage_texture(&mut backend, &textures, "metal");

        assert_eq!(stage.state().texture_unit, 1);
        assert_eq!(
            backend.uniform(uniforms::OBJECT_TEXTURE),
            Some(&UniformValue::Int(1))
        );
    }

    #[test]
    fn solid_color_disables_texturing_and_texture_reenables_it() {
        let mut backend = HeadlessBackend::new();
        let textures = registry_with(&["wood"], &mut backend);
        let mut stage = ShaderStage::new();

        stage.stage_texture(&mut backend, &textures, "wood");
        assert!(stage.state().use_texture);

        stage.stage_solid_color(&mut backend, 0.5, 0.5, 0.5, 1.0);
        assert!(!stage.state().use_texture);
        assert_eq!(
            backend.uniform(uniforms::USE_TEXTURE),
            Some(&UniformValue::Bool(false))
        );

        // The most recent staging call decides the draw mode.
        stage.stage_texture(&mut backend, &textures, "wood");
        assert!(stage.state().use_texture);
        assert_eq!(
            backend.uniform(uniforms::USE_TEXTURE),
            Some(&UniformValue::Bool(true))
        );
        // The staged color itself was never cleared.
        assert_eq!(
            backend.uniform(uniforms::OBJECT_COLOR),
            Some(&UniformValue::Vec4(Vec4::new(0.5, 0.5, 0.5, 1.0)))
        );
    }

    #[test]
    fn material_miss_keeps_previous_material_staged() {
        let mut backend = HeadlessBackend::new();
        let mut materials = MaterialRegistry::new();
        materials.define(Material::new("wood").with_shininess(0.3));
        let mut stage = ShaderStage::new();

        stage.stage_material(&mut backend, &materials, "wood");
        let staged = stage.state().material.clone();

        stage.stage_material(&mut backend, &materials, "granite");
        assert_eq!(stage.state().material, staged);
        assert_eq!(
            backend.uniform(uniforms::MATERIAL_SHININESS),
            Some(&UniformValue::Float(0.3))
        );
    }

    #[test]
    fn uv_scale_is_independent_of_surface_mode() {
        let mut backend = HeadlessBackend::new();
        let mut stage = ShaderStage::new();

        stage.stage_solid_color(&mut backend, 1.0, 0.0, 0.0, 1.0);
        stage.stage_uv_scale(&mut backend, 2.0, 3.0);

        assert!(!stage.state().use_texture);
        assert_eq!(
            backend.uniform(uniforms::UV_SCALE),
            Some(&UniformValue::Vec2(Vec2::new(2.0, 3.0)))
        );
    }

    #[test]
    fn light_sources_stage_into_indexed_records() {
        let mut backend = HeadlessBackend::new();
        let mut stage = ShaderStage::new();
        let lighting = LightingEnvironment::new()
            .add_source(
                LightSource::new(Vec3::new(13.5, 15.79, 1.9)).with_specular_intensity(15.0),
            )
            .add_source(LightSource::new(Vec3::new(-13.5, 15.79, 1.9)));

        stage.set_lighting_enabled(&mut backend, true);
        stage.stage_light_sources(&mut backend, &lighting);

        assert!(stage.state().use_lighting);
        assert_eq!(stage.state().light_sources.len(), 2);
        assert_eq!(
            backend.uniform("lightSources[0].position"),
            Some(&UniformValue::Vec3(Vec3::new(13.5, 15.79, 1.9)))
        );
        assert_eq!(
            backend.uniform("lightSources[0].specularIntensity"),
            Some(&UniformValue::Float(15.0))
        );
        assert_eq!(
            backend.uniform("lightSources[1].position"),
            Some(&UniformValue::Vec3(Vec3::new(-13.5, 15.79, 1.9)))
        );
        assert!(backend.uniform("lightSources[2].position").is_none());
    }
}
