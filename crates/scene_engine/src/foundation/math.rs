//! Math types for 3D scene composition
//!
//! Thin aliases over nalgebra so the rest of the crate reads in graphics
//! vocabulary. Column-vector convention throughout: matrices transform points
//! as `M * p`.

pub use nalgebra::{Matrix4, Unit, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;
