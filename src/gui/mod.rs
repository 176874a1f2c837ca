//! GUI module
//!
//! egui overlay and the rotation control panel.

pub mod overlay;
pub mod panel;

pub use overlay::GuiOverlay;
pub use panel::PANEL_TITLE;
