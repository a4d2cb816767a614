//! GPU-side declaration of the vertex contract.
//!
//! The vertex stage pins attribute 0 to the object-space position and
//! attribute 1 to the color, and hands the rasterizer a clip-space
//! position with w = 1. Any real transform belongs to the caller's own
//! vertex stage; these modules only fix the interface.

pub mod passthrough_vs {
    vulkano_shaders::shader! {
        ty: "vertex",
        src: r"
#version 460

layout (location = 0) in vec3 in_position;
layout (location = 1) in vec4 in_color;

layout (location = 0) out vec4 out_color;

void main() {
    gl_Position = vec4(in_position, 1.0);

    out_color = in_color;
}
        "
    }
}

pub mod passthrough_fs {
    vulkano_shaders::shader! {
        ty: "fragment",
        src: r"
#version 460

layout (location = 0) in vec4 in_color;

layout (location = 0) out vec4 out_color;

void main() {
    out_color = in_color;
}
        "
    }
}
