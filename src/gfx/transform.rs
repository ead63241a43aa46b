//! # World Transform
//!
//! Position, rotation and non-uniform scale of the object that owns a mesh.
//! Normal rays are computed in mesh-local space; the gizmo layer maps them
//! into world space with [`WorldTransform::apply`] right before submission.

use crate::visualization::normals::DebugRay;
use cgmath::{Deg, Matrix4, Quaternion, Rotation3, Vector3};

/// Translation, rotation and scale of a scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl WorldTransform {
    /// Create a transform from its three parts
    pub fn new(position: Vector3<f32>, rotation: Quaternion<f32>, scale: Vector3<f32>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Identity transform
    pub fn identity() -> Self {
        Self::new(
            Vector3::new(0.0, 0.0, 0.0),
            Quaternion::new(1.0, 0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        )
    }

    /// Pure translation
    pub fn from_translation(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn with_rotation(mut self, rotation: Quaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set rotation around the Y axis
    pub fn with_rotation_y(self, angle: Deg<f32>) -> Self {
        self.with_rotation(Quaternion::from_angle_y(angle))
    }

    /// Set non-uniform scale
    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// Set uniform scale
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vector3::new(scale, scale, scale))
    }

    /// Build the local-to-world matrix
    ///
    /// Order matters: T * R * S, so scale is applied first and translation last.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from(self.rotation);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }

    /// Map a point from mesh-local into world space
    pub fn transform_point(&self, point: Vector3<f32>) -> Vector3<f32> {
        (self.to_matrix() * point.extend(1.0)).truncate()
    }

    /// Map a direction from mesh-local into world space (no translation)
    pub fn transform_vector(&self, vector: Vector3<f32>) -> Vector3<f32> {
        (self.to_matrix() * vector.extend(0.0)).truncate()
    }

    /// Map a local-space ray into world space.
    ///
    /// Both end points land where the object's matrix puts them, so the world
    /// direction is not renormalized: non-uniform scale stretches the ray.
    pub fn apply(&self, ray: &DebugRay) -> DebugRay {
        let matrix = self.to_matrix();
        DebugRay {
            origin: (matrix * ray.origin.extend(1.0)).truncate(),
            direction: (matrix * ray.direction.extend(0.0)).truncate(),
            color: ray.color,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}
