//! Vertex format and palette

use bytemuck::{Pod, Zeroable};

/// Colored 2D vertex, in window pixels until uploaded
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Buffer layout matching `VertexInput` in the shader
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Flat RGBA colors
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const PADDLE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const BRICK: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const BRICK_OUTLINE: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
