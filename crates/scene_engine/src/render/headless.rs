//! Headless backend that records staging traffic instead of driving a GPU
//!
//! Used by tests as a recording mock and by applications that want to run the
//! full staging protocol without a graphics device (dry runs, CI).

use crate::assets::ImageData;
use crate::foundation::math::{Mat4, Vec2, Vec3, Vec4};
use crate::render::backend::{BackendResult, PrimitiveMesh, RenderBackend, TextureHandle};
use crate::render::RenderError;
use std::collections::HashMap;

/// A single uniform value captured by the headless backend
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    /// 4x4 matrix
    Mat4(Mat4),
    /// vec4
    Vec4(Vec4),
    /// vec3
    Vec3(Vec3),
    /// vec2
    Vec2(Vec2),
    /// float
    Float(f32),
    /// integer
    Int(i32),
    /// boolean
    Bool(bool),
}

/// Backend implementation that allocates monotonically increasing handles and
/// records every binding, uniform write, and draw
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    next_handle: u32,
    live_textures: Vec<TextureHandle>,
    bindings: HashMap<u32, TextureHandle>,
    uniforms: HashMap<String, UniformValue>,
    draws: Vec<PrimitiveMesh>,
}

impl HeadlessBackend {
    /// Create an empty headless backend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to the named uniform, if any
    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }

    /// Texture currently bound to the given unit, if any
    #[must_use]
    pub fn bound_texture(&self, unit: u32) -> Option<TextureHandle> {
        self.bindings.get(&unit).copied()
    }

    /// All current unit-to-handle bindings, sorted by unit
    #[must_use]
    pub fn bindings(&self) -> Vec<(u32, TextureHandle)> {
        let mut bindings: Vec<_> = self.bindings.iter().map(|(u, h)| (*u, *h)).collect();
        bindings.sort_unstable_by_key(|(unit, _)| *unit);
        bindings
    }

    /// Number of texture objects that have been created and not yet released
    #[must_use]
    pub fn live_texture_count(&self) -> usize {
        self.live_textures.len()
    }

    /// Every draw issued so far, in order
    #[must_use]
    pub fn draws(&self) -> &[PrimitiveMesh] {
        &self.draws
    }

    /// Number of draws issued so far
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_texture(&mut self, image: &ImageData) -> BackendResult<TextureHandle> {
        self.next_handle += 1;
        let handle = TextureHandle(self.next_handle);
        self.live_textures.push(handle);
        log::debug!(
            "headless: created texture {} ({}x{}, {} channels, {} bytes)",
            handle.raw(),
            image.width,
            image.height,
            image.channels,
            image.size_bytes()
        );
        Ok(handle)
    }

    fn delete_texture(&mut self, handle: TextureHandle) -> BackendResult<()> {
        match self.live_textures.iter().position(|live| *live == handle) {
            Some(index) => {
                self.live_textures.remove(index);
                log::debug!("headless: released texture {}", handle.raw());
                Ok(())
            }
            None => Err(RenderError::Backend(format!(
                "texture handle {} is not live",
                handle.raw()
            ))),
        }
    }

    fn bind_texture_unit(&mut self, unit: u32, handle: TextureHandle) {
        log::trace!("headless: unit {unit} <- texture {}", handle.raw());
        self.bindings.insert(unit, handle);
    }

    fn set_mat4(&mut self, name: &str, value: &Mat4) {
        self.uniforms
            .insert(name.to_string(), UniformValue::Mat4(*value));
    }

    fn set_vec4(&mut self, name: &str, value: Vec4) {
        self.uniforms
            .insert(name.to_string(), UniformValue::Vec4(value));
    }

    fn set_vec3(&mut self, name: &str, value: Vec3) {
        self.uniforms
            .insert(name.to_string(), UniformValue::Vec3(value));
    }

    fn set_vec2(&mut self, name: &str, value: Vec2) {
        self.uniforms
            .insert(name.to_string(), UniformValue::Vec2(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.uniforms
            .insert(name.to_string(), UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.uniforms
            .insert(name.to_string(), UniformValue::Int(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.uniforms
            .insert(name.to_string(), UniformValue::Bool(value));
    }

    fn draw_mesh(&mut self, mesh: PrimitiveMesh) {
        log::trace!("headless: draw {mesh:?}");
        self.draws.push(mesh);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_tracked() {
        let mut backend = HeadlessBackend::new();
        let image = ImageData::solid_color(2, 2, [0, 0, 0, 255]);

        let first = backend.create_texture(&image).expect("create");
        let second = backend.create_texture(&image).expect("create");
        assert_ne!(first, second);
        assert_eq!(backend.live_texture_count(), 2);

        backend.delete_texture(first).expect("release");
        assert_eq!(backend.live_texture_count(), 1);
    }

    #[test]
    fn releasing_unknown_handle_is_an_error() {
        let mut backend = HeadlessBackend::new();
        let result = backend.delete_texture(TextureHandle(42));
        assert!(matches!(result, Err(RenderError::Backend(_))));
    }

    #[test]
    fn uniform_writes_keep_last_value() {
        let mut backend = HeadlessBackend::new();
        backend.set_int("objectTexture", 3);
        backend.set_int("objectTexture", 7);
        assert_eq!(
            backend.uniform("objectTexture"),
            Some(&UniformValue::Int(7))
        );
    }
}
