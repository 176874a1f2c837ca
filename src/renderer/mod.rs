//! Scene state and rendering
//!
//! Rotation state, transform matrices and the triangle draw.

pub mod rotation;
pub mod scene;
pub mod settings;
pub mod state;
pub mod transforms;
pub mod viewport;

pub use rotation::RotationState;
pub use scene::SceneRenderer;
pub use settings::SceneSettings;
pub use state::AppState;
pub use transforms::{Projection, Transforms};
pub use viewport::{Viewport, ViewportTarget};
