//! Material property sets and the ordered material registry

use crate::foundation::math::Vec3;

/// Phong-style material properties for scene objects
///
/// All color components are expected in `[0, 1]` and `shininess` should be
/// non-negative, but the registry performs no validation; values are passed
/// to the shader as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Tag used for registry lookup; need not be unique
    pub tag: String,
    /// Ambient reflectance color
    pub ambient_color: Vec3,
    /// Scalar multiplier on the ambient contribution
    pub ambient_strength: f32,
    /// Diffuse reflectance color
    pub diffuse_color: Vec3,
    /// Specular reflectance color
    pub specular_color: Vec3,
    /// Specular exponent
    pub shininess: f32,
}

impl Material {
    /// Create a material with neutral defaults under the given tag
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ambient_color: Vec3::new(0.2, 0.2, 0.2),
            ambient_strength: 0.2,
            diffuse_color: Vec3::new(0.5, 0.5, 0.5),
            specular_color: Vec3::new(0.5, 0.5, 0.5),
            shininess: 1.0,
        }
    }

    /// Set the ambient color and strength
    #[must_use]
    pub fn with_ambient(mut self, color: Vec3, strength: f32) -> Self {
        self.ambient_color = color;
        self.ambient_strength = strength;
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

    /// Set the specular exponent
    #[must_use]
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

/// Append-only, insertion-ordered material registry
///
/// Deliberately an ordered list rather than a uniqueness-enforcing map:
/// lookup returns the first match in insertion order, so a later material
/// defined under a duplicate tag is permanently shadowed. That behavior is
/// part of the contract and is covered by tests.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    materials: Vec<Material>,
}

impl MaterialRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material unconditionally
    ///
    /// No uniqueness check and no validation of color ranges; this never
    /// fails.
    pub fn define(&mut self, material: Material) {
        log::debug!("defined material '{}'", material.tag);
        self.materials.push(material);
    }

    /// First material whose tag matches, in insertion order
    ///
    /// Returns `None` when the registry is empty or nothing matches; callers
    /// treat a miss as "leave current shader material state unchanged",
    /// never as a fatal condition.
    #[must_use]
    pub fn lookup(&self, tag: &str) -> Option<&Material> {
        self.materials.iter().find(|material| material.tag == tag)
    }

    /// Number of defined materials, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether no materials have been defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_on_empty_registry_is_none() {
        let registry = MaterialRegistry::new();
        assert!(registry.lookup("plastic").is_none());
    }

    #[test]
    fn lookup_returns_first_match_despite_later_duplicate() {
        let mut registry = MaterialRegistry::new();
        registry.define(Material::new("plastic").with_shininess(0.5));
        registry.define(Material::new("plastic").with_shininess(99.0));

        let found = registry.lookup("plastic").expect("first plastic resolves");
        assert!((found.shininess - 0.5).abs() < f32::EPSILON);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn define_accepts_out_of_range_values_unvalidated() {
        let mut registry = MaterialRegistry::new();
        registry.define(
            Material::new("weird")
                .with_diffuse(Vec3::new(2.0, -1.0, 5.0))
                .with_shininess(-3.0),
        );

        let found = registry.lookup("weird").expect("resolves");
        assert!((found.diffuse_color.x - 2.0).abs() < f32::EPSILON);
        assert!((found.shininess + 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unrelated_tags_do_not_match() {
        let mut registry = MaterialRegistry::new();
        registry.define(Material::new("wood"));
        assert!(registry.lookup("woo").is_none());
        assert!(registry.lookup("woodx").is_none());
    }
}
