//! # Scene Engine
//!
//! A small staging engine for rendering static, hand-authored 3D scenes built
//! from a fixed library of primitive meshes, textures, and materials.
//!
//! The engine owns the parts of the problem with real invariants:
//!
//! - **Texture registry**: a bounded table of up to 16 tagged texture slots,
//!   bound one-to-one onto GPU texture units in registration order
//! - **Material registry**: an append-only, insertion-ordered list of named
//!   material property sets with first-match lookup
//! - **Transform composition**: model matrices built in a fixed
//!   translate-rotate-scale order from per-axis degree rotations
//! - **Shader staging**: immediate writes of transform, color/texture choice,
//!   UV scale, material, and lighting into shared shader uniform state
//!
//! The graphics-API binding layer itself sits behind the
//! [`render::RenderBackend`] trait; a [`render::HeadlessBackend`] ships with
//! the crate so the staging protocol can run and be tested without a GPU.
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! let mut renderer = SceneRenderer::new(Box::new(HeadlessBackend::new()));
//!
//! // Setup phase: registries are populated once, before any drawing.
//! renderer.load_texture_image(&ImageData::solid_color(4, 4, [96, 64, 32, 255]), "wood")?;
//! renderer.bind_textures();
//! renderer.define_material(Material::new("wood").with_shininess(0.3));
//!
//! // Per-draw protocol: transform first, then optional surface/material.
//! renderer.set_transformations(TransformParams::new(
//!     Vec3::new(20.0, 1.0, 10.0),
//!     (0.0, 0.0, 0.0),
//!     Vec3::zeros(),
//! ));
//! renderer.set_shader_texture("wood");
//! renderer.set_texture_uv_scale(1.0, 1.0);
//! renderer.set_shader_material("wood");
//! renderer.draw_mesh(PrimitiveMesh::Plane);
//! # Ok::<(), scene_engine::render::RenderError>(())
//! ```

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::ImageData,
        config::SceneConfig,
        foundation::math::{Mat4, Vec2, Vec3, Vec4},
        render::{
            HeadlessBackend, LightSource, LightingEnvironment, Material, MaterialRegistry,
            PrimitiveMesh, RenderBackend, RenderError, SceneRenderer, TextureRegistry,
            TransformParams,
        },
    };
}
