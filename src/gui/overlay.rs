//! egui overlay painted with glow on top of the scene.

use std::sync::Arc;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;

/// Immediate-mode GUI bound to the window's GL context.
pub struct GuiOverlay {
    egui_glow: egui_glow::EguiGlow,
}

impl GuiOverlay {
    /// Create the egui context and its glow painter with the dark style.
    pub fn new(event_loop: &ActiveEventLoop, gl: Arc<glow::Context>) -> Self {
        let egui_glow = egui_glow::EguiGlow::new(event_loop, gl, None, None, true);
        egui_glow.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { egui_glow }
    }

    /// Feed a window event to egui. Returns true if egui consumed it.
    pub fn on_window_event(&mut self, window: &winit::window::Window, event: &WindowEvent) -> bool {
        self.egui_glow.on_window_event(window, event).consumed
    }

    /// Run one GUI frame: gather input, lay out widgets, tessellate.
    pub fn run(&mut self, window: &winit::window::Window, ui: impl FnMut(&egui::Context)) {
        self.egui_glow.run(window, ui);
    }

    /// Paint the last frame's draw data over whatever is in the framebuffer.
    pub fn paint(&mut self, window: &winit::window::Window) {
        self.egui_glow.paint(window);
    }

    /// Release the painter's GL objects. Call while the context is still current.
    pub fn destroy(&mut self) {
        self.egui_glow.destroy();
    }
}

impl std::fmt::Debug for GuiOverlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuiOverlay").finish()
    }
}
