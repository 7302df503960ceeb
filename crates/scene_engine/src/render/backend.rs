//! Backend abstraction for the graphics-API binding layer
//!
//! This module defines the trait that rendering backends must implement so
//! the registries and the shader stager stay independent of any particular
//! graphics API. Texture and buffer object creation, uniform upload, and the
//! primitive mesh VBO layer all live behind this seam.

use crate::assets::ImageData;
use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::RenderError;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Opaque identifier for a GPU texture object
///
/// Handles are issued by [`RenderBackend::create_texture`] and are only valid
/// with the backend that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) u32);

impl TextureHandle {
    /// Raw backend identifier, for diagnostics and logging
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// The primitive mesh library the scene script draws from
///
/// Each variant corresponds to one pre-built geometry buffer owned by the
/// backend; only one instance of each mesh exists no matter how many times it
/// is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveMesh {
    /// Flat plane in the XZ plane
    Plane,
    /// Unit box
    Box,
    /// Cylinder with caps
    Cylinder,
    /// Cylinder tapering toward the top
    TaperedCylinder,
    /// Unit sphere
    Sphere,
    /// Torus
    Torus,
    /// Triangular prism
    Prism,
}

/// Rendering backend trait
///
/// Implementations own the GPU-side resources and the active shader program.
/// Uniform setters are keyed by the shader's uniform names (see
/// [`crate::render::staging::uniforms`]); each call is an immediate write
/// into the program's uniform state.
pub trait RenderBackend {
    /// Allocate one GPU texture object, upload the pixel data in the image's
    /// channel format, and generate a full mip chain
    ///
    /// # Errors
    /// Returns [`RenderError::Backend`] if the GPU-side allocation or upload
    /// fails.
    fn create_texture(&mut self, image: &ImageData) -> BackendResult<TextureHandle>;

    /// Release a texture object previously returned by
    /// [`create_texture`](Self::create_texture)
    ///
    /// # Errors
    /// Returns [`RenderError::Backend`] if the handle is not live.
    fn delete_texture(&mut self, handle: TextureHandle) -> BackendResult<()>;

    /// Bind a texture object to the given texture unit
    fn bind_texture_unit(&mut self, unit: u32, handle: TextureHandle);

    /// Write a 4x4 matrix uniform
    fn set_mat4(&mut self, name: &str, value: &Mat4);

    /// Write a vec4 uniform
    fn set_vec4(&mut self, name: &str, value: Vec4);

    /// Write a vec3 uniform
    fn set_vec3(&mut self, name: &str, value: Vec3);

    /// Write a vec2 uniform
    fn set_vec2(&mut self, name: &str, value: Vec2);

    /// Write a float uniform
    fn set_float(&mut self, name: &str, value: f32);

    /// Write an integer (sampler index) uniform
    fn set_int(&mut self, name: &str, value: i32);

    /// Write a boolean uniform
    fn set_bool(&mut self, name: &str, value: bool);

    /// Issue a draw for one primitive mesh with the currently staged state
    fn draw_mesh(&mut self, mesh: PrimitiveMesh);

    /// Downcast to the concrete backend type for diagnostics
    fn as_any(&self) -> &dyn std::any::Any;
}
