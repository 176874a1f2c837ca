//! Model, view and projection matrices

use super::settings::SceneSettings;
use glam::{Mat4, Vec3};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Projection {
    /// Create a perspective projection.
    pub fn perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Get the projection matrix in GL clip space (depth -1..1).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov, self.aspect, self.near, self.far)
    }
}

/// The three matrices uploaded every frame.
///
/// View and projection are fixed once built; only the model matrix changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Transforms {
    /// Identity model, camera pulled back along +Z, projection for `aspect`.
    pub fn new(settings: &SceneSettings, aspect: f32) -> Self {
        let projection =
            Projection::perspective(settings.fov_degrees, aspect, settings.near, settings.far);
        Self {
            model: Mat4::IDENTITY,
            view: Mat4::from_translation(Vec3::new(0.0, 0.0, -settings.camera_distance)),
            projection: projection.matrix(),
        }
    }
}
