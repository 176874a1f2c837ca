//! Vertex types
//!
//! Vertex formats uploaded to GL array buffers.

use bytemuck::{Pod, Zeroable};

/// Vertex with position only.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct VertexP {
    pub position: [f32; 3],
}

impl VertexP {
    pub const fn new(position: [f32; 3]) -> Self {
        Self { position }
    }

    /// Describe the single position attribute.
    pub const fn layout() -> VertexAttribute {
        VertexAttribute {
            location: 0,
            components: 3,
            normalized: false,
            stride: std::mem::size_of::<VertexP>() as i32,
            offset: 0,
        }
    }
}

/// A float vertex attribute as passed to `glVertexAttribPointer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input location.
    pub location: u32,
    /// Number of f32 components.
    pub components: i32,
    /// Whether fixed-point values are normalized.
    pub normalized: bool,
    /// Byte distance between consecutive vertices.
    pub stride: i32,
    /// Byte offset of the first component.
    pub offset: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<VertexP>(), 12); // 3 floats * 4 bytes
    }

    #[test]
    fn test_layout_is_tightly_packed() {
        let layout = VertexP::layout();
        assert_eq!(layout.location, 0);
        assert_eq!(layout.components, 3);
        assert!(!layout.normalized);
        assert_eq!(layout.stride, 3 * std::mem::size_of::<f32>() as i32);
        assert_eq!(layout.offset, 0);
    }
}
