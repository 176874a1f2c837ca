//! Window management module
//!
//! Runs the frame loop on winit: each redraw lays out the GUI, advances the
//! rotation, draws the triangle, paints the GUI on top and presents.

pub mod settings;

pub use settings::WindowSettings;

use crate::context::{GlContext, InitError};
use crate::gui::{panel, GuiOverlay};
use crate::renderer::{AppState, SceneRenderer, SceneSettings};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// The application window and its frame loop.
pub struct Window {
    settings: WindowSettings,
    scene: SceneSettings,
}

impl Window {
    /// Create a new window with the given settings.
    pub fn new(settings: WindowSettings) -> Self {
        Self {
            settings,
            scene: SceneSettings::default(),
        }
    }

    /// Override the scene settings.
    pub fn scene(mut self, scene: SceneSettings) -> Self {
        self.scene = scene;
        self
    }

    /// Open the window and run until it is closed.
    ///
    /// Returns an error if the window, context or GPU resources could not be
    /// created. Nothing inside the loop itself is reported as an error.
    pub fn run(self) -> Result<(), InitError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            settings: self.settings,
            scene: self.scene,
            graphics: None,
            state: None,
            loop_state: LoopState::Running,
            init_error: None,
        };

        event_loop.run_app(&mut app)?;
        app.teardown();

        match app.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Frame loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// GL-side resources, declared in reverse creation order so they drop
/// scene first and context last.
struct Graphics {
    scene: SceneRenderer,
    gui: GuiOverlay,
    context: GlContext,
}

impl Graphics {
    fn new(
        event_loop: &ActiveEventLoop,
        settings: &WindowSettings,
        scene: &SceneSettings,
    ) -> Result<Self, InitError> {
        let context = GlContext::new(event_loop, settings)?;
        let mut gui = GuiOverlay::new(event_loop, context.gl().clone());
        let scene = match SceneRenderer::new(context.gl(), scene) {
            Ok(scene) => scene,
            Err(e) => {
                gui.destroy();
                return Err(e);
            }
        };

        Ok(Self {
            scene,
            gui,
            context,
        })
    }

    fn frame(&mut self, state: &mut AppState) {
        let window = self.context.window();

        self.gui.run(window, |ctx| {
            panel::show(ctx, &mut state.rotation);
        });

        state.advance_frame();

        self.scene.draw(self.context.gl(), &state.transforms);
        self.gui.paint(window);

        if let Err(e) = self.context.swap_buffers() {
            tracing::error!("Failed to present frame: {}", e);
        }
    }

    /// Release GPU objects in reverse order of creation, then drop the context.
    fn destroy(mut self) {
        self.scene.destroy(self.context.gl());
        self.gui.destroy();
    }
}

struct App {
    settings: WindowSettings,
    scene: SceneSettings,
    graphics: Option<Graphics>,
    state: Option<AppState>,
    loop_state: LoopState,
    init_error: Option<InitError>,
}

impl App {
    fn terminate(&mut self, event_loop: &ActiveEventLoop) {
        self.loop_state = LoopState::Terminating;
        event_loop.exit();
    }

    fn teardown(&mut self) {
        if let Some(graphics) = self.graphics.take() {
            let frames = self.state.as_ref().map_or(0, AppState::frame);
            tracing::info!("Shutting down after {} frames", frames);
            graphics.destroy();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() || self.loop_state == LoopState::Terminating {
            return;
        }

        match Graphics::new(event_loop, &self.settings, &self.scene) {
            Ok(graphics) => {
                self.state = Some(AppState::new(&self.scene, graphics.context.viewport()));
                self.graphics = Some(graphics);
            }
            Err(e) => {
                tracing::error!("Initialization failed: {}", e);
                self.init_error = Some(e);
                self.terminate(event_loop);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(graphics), Some(state)) = (&mut self.graphics, &mut self.state) else {
            return;
        };

        graphics
            .gui
            .on_window_event(graphics.context.window(), &event);

        match event {
            WindowEvent::CloseRequested => {
                self.terminate(event_loop);
            }
            WindowEvent::Resized(size) => {
                let viewport = graphics.context.resize(size);
                let gl: &glow::Context = graphics.context.gl();
                state.resize(gl, viewport);
            }
            WindowEvent::RedrawRequested => {
                if self.loop_state == LoopState::Running {
                    graphics.frame(state);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.loop_state != LoopState::Running {
            return;
        }
        if let Some(graphics) = &self.graphics {
            graphics.context.window().request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}
