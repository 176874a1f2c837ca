//! Static triangle geometry
//!
//! Owns the vertex array and vertex buffer holding the one triangle drawn each frame.

use crate::core::vertex::VertexP;
use glow::HasContext;

/// The triangle, counter-clockwise in the XY plane.
pub const TRIANGLE: [VertexP; 3] = [
    VertexP::new([-0.5, -0.5, 0.0]),
    VertexP::new([0.5, -0.5, 0.0]),
    VertexP::new([0.0, 0.5, 0.0]),
];

/// Failure to allocate a GL object for geometry.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("failed to create vertex array: {0}")]
    VertexArray(String),
    #[error("failed to create vertex buffer: {0}")]
    Buffer(String),
}

/// Uploaded triangle: a vertex array describing one buffer of [`VertexP`].
///
/// Contents never change after upload.
#[derive(Debug)]
pub struct GeometryBuffer {
    vao: glow::NativeVertexArray,
    vbo: glow::NativeBuffer,
    count: i32,
}

impl GeometryBuffer {
    /// Upload [`TRIANGLE`] with `STATIC_DRAW` and describe attribute 0.
    pub fn triangle(gl: &glow::Context) -> Result<Self, GeometryError> {
        Self::new(gl, &TRIANGLE)
    }

    /// Upload `vertices` and record their layout in a fresh vertex array.
    pub fn new(gl: &glow::Context, vertices: &[VertexP]) -> Result<Self, GeometryError> {
        let layout = VertexP::layout();
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(GeometryError::VertexArray)?;
            let vbo = gl.create_buffer().map_err(GeometryError::Buffer)?;

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );
            gl.vertex_attrib_pointer_f32(
                layout.location,
                layout.components,
                glow::FLOAT,
                layout.normalized,
                layout.stride,
                layout.offset,
            );
            gl.enable_vertex_attrib_array(layout.location);

            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);

            Ok(Self {
                vao,
                vbo,
                count: vertices.len() as i32,
            })
        }
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> i32 {
        self.count
    }

    /// Bind the vertex array for drawing.
    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.bind_vertex_array(Some(self.vao)) };
    }

    /// Delete the vertex array and buffer. Call once, at teardown.
    pub fn destroy(self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
    }
}
