//! GlContext - window, surface and OpenGL context
//!
//! Bundles the winit window with the glutin surface/context pair and the
//! loaded glow function table.

pub mod error;
pub mod loader;

pub use error::InitError;
pub use loader::REQUIRED_GL_VERSION;

use crate::renderer::Viewport;
use crate::window::WindowSettings;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{Display, DisplayApiPreference, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::GlWindow;
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::{HasDisplayHandle, HasWindowHandle, RawWindowHandle};

/// A window with a current OpenGL 3.3 core context.
///
/// Fields drop in reverse order of creation: function table, surface,
/// context, then the window itself.
pub struct GlContext {
    gl: Arc<glow::Context>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: winit::window::Window,
}

impl GlContext {
    /// Create the window, make a core-profile context current on it and load GL functions.
    pub fn new(event_loop: &ActiveEventLoop, settings: &WindowSettings) -> Result<Self, InitError> {
        let window_attrs = winit::window::WindowAttributes::default()
            .with_title(&settings.title)
            .with_inner_size(LogicalSize::new(settings.size.0, settings.size.1))
            .with_resizable(settings.resizable);
        let window = event_loop.create_window(window_attrs)?;

        let raw_window = window.window_handle()?.as_raw();
        let raw_display = event_loop.display_handle()?.as_raw();
        let display = unsafe { Display::new(raw_display, display_preference(raw_window))? };

        let template = ConfigTemplateBuilder::new()
            .compatible_with_native_window(raw_window)
            .build();
        let config = select_config(unsafe { display.find_configs(template)? })?;

        let (major, minor) = REQUIRED_GL_VERSION;
        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                major as u8,
                minor as u8,
            ))))
            .build(Some(raw_window));
        let not_current = unsafe { display.create_context(&config, &context_attrs)? };

        let surface_attrs = window.build_surface_attributes(Default::default())?;
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs)? };
        let context = not_current.make_current(&surface)?;

        let interval = if settings.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            tracing::warn!("Failed to set swap interval: {}", e);
        }

        let gl = unsafe { loader::load_functions(&display)? };

        Ok(Self {
            gl: Arc::new(gl),
            surface,
            context,
            window,
        })
    }

    /// The loaded GL function table.
    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// The native window.
    pub fn window(&self) -> &winit::window::Window {
        &self.window
    }

    /// Current framebuffer viewport.
    pub fn viewport(&self) -> Viewport {
        let size = self.window.inner_size();
        Viewport::new(size.width, size.height)
    }

    /// Resize the surface to a new framebuffer size.
    ///
    /// Zero-sized framebuffers (minimized windows) leave the surface untouched.
    pub fn resize(&self, size: PhysicalSize<u32>) -> Viewport {
        let viewport = Viewport::new(size.width, size.height);
        if let (Some(width), Some(height)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            self.surface.resize(&self.context, width, height);
        }
        viewport
    }

    /// Present the back buffer. Blocks on vsync when enabled.
    pub fn swap_buffers(&self) -> Result<(), glutin::error::Error> {
        self.surface.swap_buffers(&self.context)
    }
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext").finish()
    }
}

/// Pick the config with the fewest samples.
pub fn select_config(configs: impl Iterator<Item = Config>) -> Result<Config, InitError> {
    configs
        .min_by_key(|config| config.num_samples())
        .ok_or(InitError::NoConfig)
}

#[cfg(target_os = "macos")]
fn display_preference(_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Cgl
}

#[cfg(windows)]
fn display_preference(window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::WglThenEgl(Some(window))
}

#[cfg(all(not(windows), not(target_os = "macos")))]
fn display_preference(_window: RawWindowHandle) -> DisplayApiPreference {
    DisplayApiPreference::Egl
}
