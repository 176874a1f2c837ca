//! Core rendering abstractions
//!
//! Thin wrappers over the GL objects the scene needs: one shader program and
//! one static vertex buffer.

pub mod geometry;
pub mod render_states;
pub mod shader;
pub mod vertex;

pub use geometry::{GeometryBuffer, GeometryError, TRIANGLE};
pub use render_states::ClearState;
pub use shader::{
    compile_shader, create_program, DiagnosticSource, ShaderBackend, ShaderDiagnostic,
    ShaderError, ShaderProgram, ShaderStage, TRIANGLE_FRAGMENT_SHADER, TRIANGLE_VERTEX_SHADER,
};
pub use vertex::{VertexAttribute, VertexP};
