//! Scene settings
//!
//! Constants for the triangle scene: background, rotation and camera.

use glam::Vec3;

/// Settings for the rendered scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    /// Background color (RGBA).
    pub clear_color: [f32; 4],
    /// Rotation increment per frame, in radians.
    pub rotation_step: f32,
    /// Axis the triangle rotates about.
    pub rotation_axis: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// How far the camera sits back from the origin along +Z.
    pub camera_distance: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            clear_color: [0.45, 0.55, 0.60, 1.00],
            rotation_step: 0.01,
            rotation_axis: Vec3::Z,
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            camera_distance: 3.0,
        }
    }
}

impl SceneSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color.
    pub fn clear_color(mut self, color: [f32; 4]) -> Self {
        self.clear_color = color;
        self
    }

    /// Set the per-frame rotation increment.
    pub fn rotation_step(mut self, step: f32) -> Self {
        self.rotation_step = step;
        self
    }

    /// Set the rotation axis.
    pub fn rotation_axis(mut self, axis: Vec3) -> Self {
        self.rotation_axis = axis;
        self
    }

    /// Set the vertical field of view.
    pub fn fov_degrees(mut self, fov: f32) -> Self {
        self.fov_degrees = fov;
        self
    }

    /// Set the near and far clipping planes.
    pub fn clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Set the camera distance.
    pub fn camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }
}
