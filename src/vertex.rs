use bytemuck::{Pod, Zeroable};
use vulkano::pipeline::graphics::vertex_input::Vertex as VertexTrait;

/// Per-vertex record read by the vertex stage from a host-populated buffer
///
/// Field order and offsets are part of the contract: host code must write
/// buffers with exactly this layout, position at offset 0 and color at
/// offset 12. Mismatched producer layouts are not detectable here.
///
/// Fields are plain float arrays so the record stays 4-byte aligned and
/// padding-free regardless of SIMD vector alignment. `Pod` makes both
/// records `BufferContents` through vulkano's blanket impl.
#[derive(VertexTrait, Pod, Zeroable, Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct VertexIn {
    /// Object-space position, attribute 0
    #[format(R32G32B32_SFLOAT)]
    pub position: [f32; 3],
    /// RGBA color, attribute 1
    #[format(R32G32B32A32_SFLOAT)]
    pub color: [f32; 4],
}

impl Default for VertexIn {
    fn default() -> Self {
        VertexIn {
            position: [0.0, 0.0, 0.0],
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Per-vertex record produced by the vertex stage for the rasterizer
#[derive(Pod, Zeroable, Clone, Copy, PartialEq, Debug)]
#[repr(C)]
pub struct VertexOut {
    /// Homogeneous clip-space position, consumed by the rasterizer for
    /// clipping and perspective divide
    pub position: [f32; 4],
    /// Color varying, interpolated perspective-correct across the primitive
    pub color: [f32; 4],
}
