//! Render state configurations

use glow::HasContext;

/// Framebuffer clear applied at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearState {
    /// Color to clear to (RGBA), or None to not clear.
    pub color: Option<[f32; 4]>,
}

impl ClearState {
    /// Create a clear state that clears color only.
    pub fn color(color: [f32; 4]) -> Self {
        Self { color: Some(color) }
    }

    /// Issue the clear.
    pub fn apply(&self, gl: &glow::Context) {
        if let Some([r, g, b, a]) = self.color {
            unsafe {
                gl.clear_color(r, g, b, a);
                gl.clear(glow::COLOR_BUFFER_BIT);
            }
        }
    }
}
