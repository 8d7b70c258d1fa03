//! Shared spatial transform for scene objects.

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Position, orientation, and bounding box shared by sprites and emitters.
///
/// Composed into both rather than inherited: anything carrying a `Transform`
/// can be placed, oriented, and hit-tested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about the screen normal, in degrees.
    pub rotation: f32,
    pub scale: Vec3,
    /// Bounding box width, centered on `position`.
    pub width: f32,
    /// Bounding box height, centered on `position`.
    pub height: f32,
}

impl Transform {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            scale: Vec3::ONE,
            width,
            height,
        }
    }

    /// World matrix: translation followed by rotation about Z.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_z(self.rotation.to_radians())
    }

    /// Point-in-box test for a point already in this object's local
    /// (un-rotated, un-translated) frame. Edges count as inside.
    pub fn contains_local(&self, p: Vec3) -> bool {
        p.x >= -self.width / 2.0
            && p.x <= self.width / 2.0
            && p.y >= -self.height / 2.0
            && p.y <= self.height / 2.0
    }

    /// Bring a world-space point into the local frame and test the box.
    pub fn contains_world(&self, p: Vec3) -> bool {
        let local = self.matrix().inverse() * Vec4::new(p.x, p.y, p.z, 1.0);
        self.contains_local(local.truncate())
    }
}
