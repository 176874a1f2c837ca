//! Initialization errors
//!
//! Every failure that can happen before the first frame is fatal and surfaces as [`InitError`].

use crate::core::geometry::GeometryError;
use crate::core::shader::ShaderError;

/// Error raised while bringing up the window, the GL context or the GPU resources.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The winit event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    /// The display offered no config usable with the window.
    #[error("no OpenGL config matches the window")]
    NoConfig,

    /// The native window handle was not available.
    #[error("window handle unavailable: {0}")]
    Handle(#[from] winit::raw_window_handle::HandleError),

    /// Context or surface creation failed in glutin.
    #[error("failed to create OpenGL context: {0}")]
    Context(#[from] glutin::error::Error),

    /// The GL entry points resolved to a context older than required.
    #[error("OpenGL {found_major}.{found_minor} is too old, {required_major}.{required_minor} core is required")]
    Version {
        found_major: u32,
        found_minor: u32,
        required_major: u32,
        required_minor: u32,
    },

    /// A shader or program object could not be allocated.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// A vertex array or buffer object could not be allocated.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
