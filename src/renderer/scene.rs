//! Triangle scene rendering
//!
//! Owns the GL program and geometry for the process lifetime.

use super::settings::SceneSettings;
use super::transforms::Transforms;
use crate::context::InitError;
use crate::core::{
    create_program, ClearState, GeometryBuffer, ShaderProgram, TRIANGLE_FRAGMENT_SHADER,
    TRIANGLE_VERTEX_SHADER,
};
use glam::Mat4;
use glow::HasContext;

pub const MODEL_UNIFORM: &str = "model";
pub const VIEW_UNIFORM: &str = "view";
pub const PROJECTION_UNIFORM: &str = "projection";

/// The single shader program and triangle buffer.
#[derive(Debug)]
pub struct SceneRenderer {
    program: ShaderProgram<glow::NativeProgram>,
    geometry: GeometryBuffer,
    clear: ClearState,
}

impl SceneRenderer {
    /// Compile the embedded shaders and upload the triangle.
    ///
    /// Compile and link failures are logged and leave an unusable program in
    /// place; only object allocation failures are returned.
    pub fn new(gl: &glow::Context, settings: &SceneSettings) -> Result<Self, InitError> {
        let program = create_program(gl, TRIANGLE_VERTEX_SHADER, TRIANGLE_FRAGMENT_SHADER)?;
        let geometry = match GeometryBuffer::triangle(gl) {
            Ok(geometry) => geometry,
            Err(e) => {
                unsafe { gl.delete_program(program.handle()) };
                return Err(e.into());
            }
        };

        Ok(Self {
            program,
            geometry,
            clear: ClearState::color(settings.clear_color),
        })
    }

    /// Clear the framebuffer and draw the triangle with `transforms`.
    ///
    /// Uniform locations are looked up by name on every call.
    pub fn draw(&self, gl: &glow::Context, transforms: &Transforms) {
        let program = self.program.handle();
        self.clear.apply(gl);

        unsafe {
            gl.use_program(Some(program));
            set_matrix(gl, program, MODEL_UNIFORM, &transforms.model);
            set_matrix(gl, program, VIEW_UNIFORM, &transforms.view);
            set_matrix(gl, program, PROJECTION_UNIFORM, &transforms.projection);
        }

        self.geometry.bind(gl);
        unsafe {
            gl.draw_arrays(glow::TRIANGLES, 0, self.geometry.vertex_count());
        }
    }

    /// Delete the vertex array, buffer and program. Call once, at teardown.
    pub fn destroy(self, gl: &glow::Context) {
        self.geometry.destroy(gl);
        unsafe { gl.delete_program(self.program.handle()) };
    }
}

unsafe fn set_matrix(gl: &glow::Context, program: glow::NativeProgram, name: &str, matrix: &Mat4) {
    let location = unsafe { gl.get_uniform_location(program, name) };
    unsafe { gl.uniform_matrix_4_f32_slice(location.as_ref(), false, &matrix.to_cols_array()) };
}
