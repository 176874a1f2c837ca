//! trispin
//!
//! A window with an OpenGL 3.3 core context, one orange triangle and an egui
//! control panel whose button starts and stops the triangle's rotation.
//!
//! # Architecture
//!
//! 1. **context** - Window, GL context and function loading (winit, glutin, glow)
//! 2. **core** - GL primitives (shader program, vertex buffer, clear state)
//! 3. **renderer** - Rotation state, transform matrices, triangle draw
//! 4. **gui** - egui overlay and the control panel
//! 5. **window** - Window settings and the frame loop

pub mod context;
pub mod core;
pub mod gui;
pub mod renderer;
pub mod window;

pub use context::{GlContext, InitError};

pub use core::{
    ClearState, GeometryBuffer, ShaderBackend, ShaderDiagnostic, ShaderProgram, ShaderStage,
    VertexP,
};

pub use renderer::{
    AppState, Projection, RotationState, SceneRenderer, SceneSettings, Transforms, Viewport,
    ViewportTarget,
};

pub use gui::GuiOverlay;

pub use window::{LoopState, Window, WindowSettings};

// Re-export glam for convenience
pub use glam;
