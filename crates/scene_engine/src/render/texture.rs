//! Bounded texture slot table
//!
//! The registry owns up to [`TEXTURE_SLOT_COUNT`] loaded textures, each
//! tagged with a name. Slots fill append-only from index 0, and after
//! [`TextureRegistry::bind_all`] slot *i* is bound to GPU texture unit *i*,
//! so a slot's position doubles as its sampler unit index.

use crate::assets::ImageData;
use crate::render::backend::{RenderBackend, TextureHandle};
use crate::render::RenderError;
use std::path::Path;

/// Number of texture slots, matching the number of addressable GPU texture
/// units
pub const TEXTURE_SLOT_COUNT: usize = 16;

/// One registered texture: its tag and the backend handle
#[derive(Debug, Clone)]
struct TextureSlot {
    tag: String,
    handle: TextureHandle,
}

/// Registry owning the scene's loaded textures
///
/// The registry is the sole owner of the handles it creates; no other
/// component may release them. Tags are looked up by linear scan in
/// registration order with first match winning, so a duplicate tag shadows
/// any later registration under the same name.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    slots: Vec<TextureSlot>,
}

impl TextureRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(TEXTURE_SLOT_COUNT),
        }
    }

    /// Load the image at `path` and register it under `tag`
    ///
    /// On success one GPU texture object is allocated, the pixel data is
    /// uploaded in its detected channel format with a full mip chain, and a
    /// new slot is appended. On any failure no slot is consumed and no
    /// handle is leaked.
    ///
    /// # Errors
    /// [`RenderError::TextureCapacityExceeded`] when all slots are filled,
    /// [`RenderError::Asset`] when the file is unreadable or has an
    /// unsupported channel count, [`RenderError::Backend`] when the upload
    /// fails.
    pub fn register(
        &mut self,
        backend: &mut dyn RenderBackend,
        path: &Path,
        tag: &str,
    ) -> Result<(), RenderError> {
        self.check_capacity(tag)?;
        let image = ImageData::from_file(path)?;
        self.push_slot(backend, &image, tag)
    }

    /// Register an already decoded image under `tag`
    ///
    /// Same contract as [`register`](Self::register), minus the decode step.
    ///
    /// # Errors
    /// [`RenderError::TextureCapacityExceeded`] when all slots are filled,
    /// [`RenderError::Backend`] when the upload fails.
    pub fn register_image(
        &mut self,
        backend: &mut dyn RenderBackend,
        image: &ImageData,
        tag: &str,
    ) -> Result<(), RenderError> {
        self.check_capacity(tag)?;
        self.push_slot(backend, image, tag)
    }

    fn check_capacity(&self, tag: &str) -> Result<(), RenderError> {
        if self.slots.len() == TEXTURE_SLOT_COUNT {
            return Err(RenderError::TextureCapacityExceeded {
                tag: tag.to_string(),
            });
        }
        Ok(())
    }

    fn push_slot(
        &mut self,
        backend: &mut dyn RenderBackend,
        image: &ImageData,
        tag: &str,
    ) -> Result<(), RenderError> {
        let handle = backend.create_texture(image)?;
        log::debug!(
            "registered texture '{}' in slot {} (handle {})",
            tag,
            self.slots.len(),
            handle.raw()
        );
        self.slots.push(TextureSlot {
            tag: tag.to_string(),
            handle,
        });
        Ok(())
    }

    /// Bind slot *i* to texture unit *i* for every filled slot
    ///
    /// Call once after all registrations and before any draw that samples by
    /// unit index. Calling it again without intervening registrations
    /// produces identical bindings.
    pub fn bind_all(&self, backend: &mut dyn RenderBackend) {
        for (unit, slot) in self.slots.iter().enumerate() {
            backend.bind_texture_unit(unit as u32, slot.handle);
        }
    }

    /// Handle of the first texture registered under `tag`
    #[must_use]
    pub fn handle(&self, tag: &str) -> Option<TextureHandle> {
        self.slots.iter().find(|slot| slot.tag == tag).map(|slot| slot.handle)
    }

    /// Unit index of the first texture registered under `tag`
    ///
    /// Equals the bound texture unit after [`bind_all`](Self::bind_all).
    #[must_use]
    pub fn unit(&self, tag: &str) -> Option<u32> {
        self.slots
            .iter()
            .position(|slot| slot.tag == tag)
            .map(|index| index as u32)
    }

    /// Release every owned texture object and empty the registry
    ///
    /// Capacity is fully available again afterwards. A backend failure to
    /// release one handle is logged and does not stop the rest from being
    /// released.
    pub fn release_all(&mut self, backend: &mut dyn RenderBackend) {
        for slot in self.slots.drain(..) {
            if let Err(err) = backend.delete_texture(slot.handle) {
                log::warn!("failed to release texture '{}': {err}", slot.tag);
            }
        }
    }

    /// Number of filled slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no textures are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::headless::HeadlessBackend;
    use std::collections::HashSet;

    fn test_image() -> ImageData {
        ImageData::solid_color(2, 2, [128, 128, 128, 255])
    }

    #[test]
    fn register_then_lookup_returns_fresh_handle_and_unit() {
        let mut backend = HeadlessBackend::new();
        let mut registry = TextureRegistry::new();
        let mut seen = HashSet::new();

        for (index, tag) in ["wood", "metal", "plastic"].iter().enumerate() {
            registry
                .register_image(&mut backend, &test_image(), tag)
                .expect("registration succeeds");
            let handle = registry.handle(tag).expect("handle resolves");
            assert!(seen.insert(handle), "handle must be previously unseen");
            assert_eq!(registry.unit(tag), Some(index as u32));
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn lookup_misses_return_none() {
        let registry = TextureRegistry::new();
        assert_eq!(registry.handle("missing"), None);
        assert_eq!(registry.unit("missing"), None);
    }

    #[test]
    fn duplicate_tag_resolves_to_first_registration() {
        let mut backend = HeadlessBackend::new();
        let mut registry = TextureRegistry::new();

        registry
            .register_image(&mut backend, &test_image(), "wood")
            .expect("first");
        let first = registry.handle("wood").expect("resolves");
        registry
            .register_image(&mut backend, &test_image(), "wood")
            .expect("second");

        assert_eq!(registry.handle("wood"), Some(first));
        assert_eq!(registry.unit("wood"), Some(0));
    }

    #[test]
    fn seventeenth_registration_fails_without_mutating_slots() {
        let mut backend = HeadlessBackend::new();
        let mut registry = TextureRegistry::new();

        for index in 0..TEXTURE_SLOT_COUNT {
            registry
                .register_image(&mut backend, &test_image(), &format!("tex{index}"))
                .expect("registration within capacity");
        }
        assert_eq!(registry.len(), TEXTURE_SLOT_COUNT);
        let handles_before: Vec<_> = (0..TEXTURE_SLOT_COUNT)
            .map(|index| registry.handle(&format!("tex{index}")))
            .collect();

        let result = registry.register_image(&mut backend, &test_image(), "overflow");
        assert!(matches!(
            result,
            Err(RenderError::TextureCapacityExceeded { .. })
        ));
        assert_eq!(registry.len(), TEXTURE_SLOT_COUNT);
        assert_eq!(registry.handle("overflow"), None);
        // No backend allocation happened for the rejected registration.
        assert_eq!(backend.live_texture_count(), TEXTURE_SLOT_COUNT);
        for (index, handle) in handles_before.iter().enumerate() {
            assert_eq!(registry.handle(&format!("tex{index}")), *handle);
        }
    }

    #[test]
    fn failed_load_consumes_no_slot() {
        let mut backend = HeadlessBackend::new();
        let mut registry = TextureRegistry::new();

        let result = registry.register(&mut backend, Path::new("no/such/file.jpg"), "ghost");
        assert!(matches!(result, Err(RenderError::Asset(_))));
        assert!(registry.is_empty());
        assert_eq!(backend.live_texture_count(), 0);
        assert_eq!(registry.unit("ghost"), None);
    }

    #[test]
    fn bind_all_is_idempotent() {
        let mut backend = HeadlessBackend::new();
        let mut registry = TextureRegistry::new();

        for tag in ["a", "b", "c"] {
            registry
                .register_image(&mut backend, &test_image(), tag)
                .expect("register");
        }

        registry.bind_all(&mut backend);
        let first_bindings = backend.bindings();
        registry.bind_all(&mut backend);
        assert_eq!(backend.bindings(), first_bindings);
        assert_eq!(first_bindings.len(), 3);
    }

    #[test]
    fn release_all_empties_registry_and_restores_capacity() {
        let mut backend = HeadlessBackend::new();
        let mut registry = TextureRegistry::new();

        for index in 0..TEXTURE_SLOT_COUNT {
            registry
                .register_image(&mut backend, &test_image(), &format!("tex{index}"))
                .expect("register");
        }

        registry.release_all(&mut backend);
        assert!(registry.is_empty());
        assert_eq!(backend.live_texture_count(), 0);

        // Full capacity is available again.
        registry
            .register_image(&mut backend, &test_image(), "fresh")
            .expect("capacity restored");
        assert_eq!(registry.unit("fresh"), Some(0));
    }
}
