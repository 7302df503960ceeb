//! Model matrix composition
//!
//! Every draw composes its model matrix in the same fixed order:
//! `M = T * Rx * Ry * Rz * S`. Rotations are taken about the world X, Y,
//! and Z axes from degree inputs and applied before translation; the three
//! axis rotations do not commute, so the X-then-Y-then-Z order is part of
//! the contract regardless of which angles are zero.

use crate::foundation::math::{Mat4, Vec3};

/// Scale, per-axis rotations in degrees, and translation for one draw
///
/// Pure value type, recomputed fresh for every draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Per-axis scale factors
    pub scale: Vec3,
    /// Rotations about the world X, Y, Z axes, in degrees
    pub rotation_degrees: (f32, f32, f32),
    /// Translation applied after scale and rotation
    pub position: Vec3,
}

impl TransformParams {
    /// Bundle the transform parameters for one draw
    #[must_use]
    pub const fn new(scale: Vec3, rotation_degrees: (f32, f32, f32), position: Vec3) -> Self {
        Self {
            scale,
            rotation_degrees,
            position,
        }
    }

    /// Compose the model matrix for these parameters
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        let (x_deg, y_deg, z_deg) = self.rotation_degrees;
        model_matrix(self.scale, x_deg, y_deg, z_deg, self.position)
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation_degrees: (0.0, 0.0, 0.0),
            position: Vec3::zeros(),
        }
    }
}

/// Compose a model matrix as `T * Rx * Ry * Rz * S`
///
/// Column-vector convention: the result transforms points as `M * p`, so
/// scale applies first, then the three axis rotations in X, Y, Z order, then
/// translation. All three rotation matrices are always computed; a zero
/// angle yields the identity.
#[must_use]
pub fn model_matrix(
    scale: Vec3,
    x_rotation_degrees: f32,
    y_rotation_degrees: f32,
    z_rotation_degrees: f32,
    position: Vec3,
) -> Mat4 {
    let s = Mat4::new_nonuniform_scaling(&scale);
    let rx = Mat4::from_axis_angle(&Vec3::x_axis(), x_rotation_degrees.to_radians());
    let ry = Mat4::from_axis_angle(&Vec3::y_axis(), y_rotation_degrees.to_radians());
    let rz = Mat4::from_axis_angle(&Vec3::z_axis(), z_rotation_degrees.to_radians());
    let t = Mat4::new_translation(&position);

    t * rx * ry * rz * s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn identity_parameters_compose_to_identity() {
        let matrix = TransformParams::default().to_matrix();
        assert_relative_eq!(matrix, Mat4::identity(), epsilon = 1.0e-6);
    }

    #[test]
    fn composition_matches_explicit_factor_product() {
        let matrix = model_matrix(
            Vec3::new(2.0, 1.0, 1.0),
            0.0,
            90.0,
            0.0,
            Vec3::new(5.0, 0.0, 0.0),
        );
        let expected = Mat4::new_translation(&Vec3::new(5.0, 0.0, 0.0))
            * Mat4::from_axis_angle(&Vec3::y_axis(), 90.0_f32.to_radians())
            * Mat4::new_nonuniform_scaling(&Vec3::new(2.0, 1.0, 1.0));

        assert_relative_eq!(matrix, expected, epsilon = 1.0e-6);

        // Scale doubles x, the 90 degree yaw carries +x onto -z, then the
        // translation moves the point to (5, 0, -2).
        let point = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point, Point3::new(5.0, 0.0, -2.0), epsilon = 1.0e-5);
    }

    #[test]
    fn axis_rotations_apply_in_x_y_z_order() {
        let composed = model_matrix(
            Vec3::new(1.0, 1.0, 1.0),
            90.0,
            90.0,
            0.0,
            Vec3::zeros(),
        );
        let x_then_y = Mat4::from_axis_angle(&Vec3::x_axis(), 90.0_f32.to_radians())
            * Mat4::from_axis_angle(&Vec3::y_axis(), 90.0_f32.to_radians());
        let y_then_x = Mat4::from_axis_angle(&Vec3::y_axis(), 90.0_f32.to_radians())
            * Mat4::from_axis_angle(&Vec3::x_axis(), 90.0_f32.to_radians());

        assert_relative_eq!(composed, x_then_y, epsilon = 1.0e-6);
        // The reversed order genuinely differs, so the fixed order matters.
        let difference = (composed - y_then_x).abs().max();
        assert!(difference > 0.5);
    }

    #[test]
    fn translation_applies_last() {
        let matrix = model_matrix(
            Vec3::new(1.0, 1.0, 1.0),
            0.0,
            0.0,
            90.0,
            Vec3::new(0.0, 3.0, 0.0),
        );
        // A 90 degree roll carries +x onto +y before the translation.
        let point = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(point, Point3::new(0.0, 4.0, 0.0), epsilon = 1.0e-5);
    }
}
