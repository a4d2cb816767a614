//! Shared vertex data contract between host-side geometry preparation and
//! the GPU vertex stage.
//!
//! Host code fills vertex buffers with [vertex::VertexIn] records and
//! registers the binding described by [layout::InputDataBinding] with its
//! pipeline configuration. The vertex stage produces one
//! [vertex::VertexOut] per invocation, which the fixed-function rasterizer
//! interpolates across the primitive.

pub mod layout;
pub mod shaders;
pub mod vertex;
