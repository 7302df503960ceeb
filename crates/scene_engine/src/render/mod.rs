//! # Scene rendering core
//!
//! The registries, transform composition, and shader staging that every draw
//! in a static scene goes through. The module is organized around a strict
//! two-phase lifecycle:
//!
//! 1. **Setup**: textures are registered and bound to units, materials and
//!    lights are defined. This phase fully precedes rendering.
//! 2. **Render loop**: per draw, the scene script composes a transform,
//!    stages the surface (texture or flat color), optionally stages a
//!    material, and issues the draw. The registries are only read.
//!
//! [`SceneRenderer`] is the facade applications use; the individual
//! components ([`TextureRegistry`], [`MaterialRegistry`], [`ShaderStage`],
//! [`transform`]) are public for direct use and testing.

pub mod backend;
pub mod headless;
pub mod lighting;
pub mod material;
pub mod staging;
pub mod texture;
pub mod transform;


pub use backend::{BackendResult, PrimitiveMesh, RenderBackend, TextureHandle};
pub use headless::{HeadlessBackend, UniformValue};
pub use lighting::{LightSource, LightingEnvironment, MAX_LIGHT_SOURCES};
pub use material::{Material, MaterialRegistry};
pub use staging::{MaterialState, ShaderStage, ShaderState, UNIT_NOT_FOUND};
pub use texture::{TextureRegistry, TEXTURE_SLOT_COUNT};
pub use transform::{model_matrix, TransformParams};

use crate::assets::ImageData;
use std::path::Path;
use thiserror::Error;

/// Errors raised by registry and backend operations
///
/// Lookup misses are deliberately not errors; they surface as `Option` or as
/// silent sentinel staging, and callers are expected to tolerate them.
#[derive(Debug, Error)]
pub enum RenderError {
    /// All 16 texture slots are filled; registration was rejected before any
    /// resource was allocated
    #[error("cannot register texture '{tag}': all 16 texture slots are in use")]
    TextureCapacityExceeded {
        /// Tag of the rejected registration
        tag: String,
    },

    /// Image load or decode failure
    #[error(transparent)]
    Asset(#[from] crate::assets::AssetError),

    /// Failure reported by the graphics backend
    #[error("backend error: {0}")]
    Backend(String),
}

/// Facade owning the backend, the registries, and the staged shader state
///
/// One `SceneRenderer` per scene: the scene script populates the registries
/// during setup, then drives the per-draw staging protocol through it. The
/// renderer exclusively owns the texture handles it creates and releases
/// them on drop if the application has not already done so.
pub struct SceneRenderer {
    backend: Box<dyn RenderBackend>,
    textures: TextureRegistry,
    materials: MaterialRegistry,
    stage: ShaderStage,
    lighting: LightingEnvironment,
}

impl SceneRenderer {
    /// Create a renderer over the given backend
    #[must_use]
    pub fn new(backend: Box<dyn RenderBackend>) -> Self {
        Self {
            backend,
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
            stage: ShaderStage::new(),
            lighting: LightingEnvironment::new(),
        }
    }

    /// The backend, for diagnostics and downcasting
    #[must_use]
    pub fn backend(&self) -> &dyn RenderBackend {
        self.backend.as_ref()
    }

    /// The texture registry
    #[must_use]
    pub const fn textures(&self) -> &TextureRegistry {
        &self.textures
    }

    /// The material registry
    #[must_use]
    pub const fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// The mirror of the currently staged shader state
    #[must_use]
    pub const fn shader_state(&self) -> &ShaderState {
        self.stage.state()
    }

    /// The configured lighting environment
    #[must_use]
    pub const fn lighting(&self) -> &LightingEnvironment {
        &self.lighting
    }

    /// Load the image at `path` and register it under `tag`
    ///
    /// # Errors
    /// See [`TextureRegistry::register`]. A load failure is non-fatal for
    /// the scene: the slot is simply absent and later lookups for the tag
    /// miss.
    pub fn load_texture(&mut self, path: &Path, tag: &str) -> Result<(), RenderError> {
        self.textures.register(self.backend.as_mut(), path, tag)
    }

    /// Register an already decoded image under `tag`
    ///
    /// # Errors
    /// See [`TextureRegistry::register_image`].
    pub fn load_texture_image(&mut self, image: &ImageData, tag: &str) -> Result<(), RenderError> {
        self.textures
            .register_image(self.backend.as_mut(), image, tag)
    }

    /// Bind every registered texture to its slot-indexed unit
    pub fn bind_textures(&mut self) {
        self.textures.bind_all(self.backend.as_mut());
    }

    /// Append a material definition
    pub fn define_material(&mut self, material: Material) {
        self.materials.define(material);
    }

    /// Compose and stage the model matrix for the next draw
    pub fn set_transformations(&mut self, params: TransformParams) {
        let model = params.to_matrix();
        self.stage.stage_transform(self.backend.as_mut(), &model);
    }

    /// Stage a flat color for the next draw, disabling texturing
    pub fn set_shader_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.stage
            .stage_solid_color(self.backend.as_mut(), red, green, blue, alpha);
    }

    /// Stage the texture registered under `tag` for the next draw
    pub fn set_shader_texture(&mut self, tag: &str) {
        self.stage
            .stage_texture(self.backend.as_mut(), &self.textures, tag);
    }

    /// Stage the texture coordinate scale for the next draw
    pub fn set_texture_uv_scale(&mut self, u: f32, v: f32) {
        self.stage.stage_uv_scale(self.backend.as_mut(), u, v);
    }

    /// Stage the material defined under `tag` for the next draw
    pub fn set_shader_material(&mut self, tag: &str) {
        self.stage
            .stage_material(self.backend.as_mut(), &self.materials, tag);
    }

    /// Enable lighting and stage every configured light source
    ///
    /// Called once at scene setup, after which light uniforms stay fixed.
    pub fn setup_lights(&mut self, lighting: LightingEnvironment) {
        self.stage.set_lighting_enabled(self.backend.as_mut(), true);
        self.stage
            .stage_light_sources(self.backend.as_mut(), &lighting);
        self.lighting = lighting;
    }

    /// Issue a draw for one primitive mesh with the currently staged state
    pub fn draw_mesh(&mut self, mesh: PrimitiveMesh) {
        self.backend.draw_mesh(mesh);
    }

    /// Release every texture the renderer owns
    ///
    /// Safe to call more than once; the drop implementation calls it for
    /// scenes that do not tear down explicitly.
    pub fn release_textures(&mut self) {
        self.textures.release_all(self.backend.as_mut());
    }
}

impl Drop for SceneRenderer {
    fn drop(&mut self) {
        self.release_textures();
    }
}
