//! Rotation state
//!
//! A toggled, monotonically growing rotation angle. Stopping freezes the
//! angle; starting again resumes from where it stopped.

use glam::{Mat4, Vec3};

/// Rotation flag plus unbounded angle accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    rotating: bool,
    angle: f32,
    step: f32,
    axis: Vec3,
}

impl RotationState {
    /// A stopped rotation at angle zero. `axis` is normalized; a zero axis falls back to +Z.
    pub fn new(step: f32, axis: Vec3) -> Self {
        Self {
            rotating: false,
            angle: 0.0,
            step,
            axis: axis.normalize_or(Vec3::Z),
        }
    }

    /// Flip between rotating and frozen.
    pub fn toggle(&mut self) {
        self.rotating = !self.rotating;
        tracing::debug!(
            "rotation {} at {:.3} rad",
            if self.rotating { "started" } else { "stopped" },
            self.angle
        );
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Accumulated angle in radians.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Per-frame increment in radians.
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Advance one frame.
    ///
    /// Returns the new model matrix while rotating, `None` while frozen.
    pub fn advance(&mut self) -> Option<Mat4> {
        if !self.rotating {
            return None;
        }
        self.angle += self.step;
        Some(self.model_matrix())
    }

    /// Rotation by the current angle about the axis.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_axis_angle(self.axis, self.angle)
    }

    /// Label for the control panel button.
    pub fn button_label(&self) -> &'static str {
        if self.rotating {
            "Stop Rotation"
        } else {
            "Start Rotation"
        }
    }
}
