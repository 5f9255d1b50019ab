//! Math utilities and types
//!
//! Placement vocabulary shared by pools and hosts.

pub use nalgebra::{Quaternion, Unit, Vector3, Matrix4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Canonical scale applied to every instance handed out by a pool
pub fn unit_scale() -> Vec3 {
    Vec3::new(1.0, 1.0, 1.0)
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position relative to the parent (or world when unparented)
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: unit_scale(),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Convert to a transformation matrix (TRS order)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Combine this (parent) transform with a child's local transform
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            position: self.position + self.rotation * (self.scale.component_mul(&other.position)),
            rotation: self.rotation * other.rotation,
            scale: self.scale.component_mul(&other.scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_identity() {
        let transform = Transform::identity();
        assert_eq!(transform.position, Vec3::zeros());
        assert_eq!(transform.scale, unit_scale());
        assert_relative_eq!(transform.rotation, Quat::identity(), epsilon = 1e-6);
    }

    #[test]
    fn test_combine_applies_parent_rotation_and_offset() {
        let parent = Transform::from_position_rotation(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_axis_angle(&Vec3::y_axis(), std::f32::consts::FRAC_PI_2),
        );
        let child = Transform::from_position_rotation(Vec3::new(0.0, 0.0, -1.0), Quat::identity());

        let world = parent.combine(&child);

        // -Z rotated 90 degrees about +Y lands on -X
        assert_relative_eq!(world.position, Vec3::new(9.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_to_matrix_translation_column() {
        let transform = Transform::from_position_rotation(Vec3::new(1.0, 2.0, 3.0), Quat::identity())
            .with_scale(Vec3::new(2.0, 2.0, 2.0));
        let matrix = transform.to_matrix();
        assert_relative_eq!(matrix.m14, 1.0);
        assert_relative_eq!(matrix.m24, 2.0);
        assert_relative_eq!(matrix.m34, 3.0);
        assert_relative_eq!(matrix.m11, 2.0);
    }
}
