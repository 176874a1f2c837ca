//! Per-frame application state
//!
//! Everything the frame loop mutates lives here.

use super::rotation::RotationState;
use super::settings::SceneSettings;
use super::transforms::Transforms;
use super::viewport::{Viewport, ViewportTarget};

/// Rotation, matrices and viewport carried through the frame loop.
#[derive(Debug, Clone)]
pub struct AppState {
    pub rotation: RotationState,
    pub transforms: Transforms,
    viewport: Viewport,
    frame: u64,
}

impl AppState {
    /// Build the state for a window whose framebuffer is `viewport`.
    ///
    /// The projection aspect ratio is taken from `viewport` here and never
    /// recomputed afterwards.
    pub fn new(settings: &SceneSettings, viewport: Viewport) -> Self {
        Self {
            rotation: RotationState::new(settings.rotation_step, settings.rotation_axis),
            transforms: Transforms::new(settings, viewport.aspect()),
            viewport,
            frame: 0,
        }
    }

    /// Advance rotation by one frame, rebuilding the model matrix while rotating.
    pub fn advance_frame(&mut self) {
        if let Some(model) = self.rotation.advance() {
            self.transforms.model = model;
        }
        self.frame += 1;
    }

    /// Follow a framebuffer resize: point `target` at the new size.
    ///
    /// Projection is left as built. Empty sizes are recorded but not applied.
    pub fn resize<T: ViewportTarget + ?Sized>(&mut self, target: &T, viewport: Viewport) {
        tracing::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        viewport.apply(target);
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
