use std::{iter::once, mem};

use crate::vertex::VertexIn;

mod vk {
    pub use vulkano::{
        format::Format,
        pipeline::graphics::vertex_input::{
            VertexInputAttributeDescription, VertexInputBindingDescription, VertexInputRate,
            VertexInputState,
        },
    };
}

/// Enumeration of data rates of [InputDataBinding]
#[derive(Clone, Copy)]
pub enum InputDataRate {
    /// Each element of the data source corresponds to a vertex
    PerVertex,
    /// Each element of the data source corresponds to an instance
    PerInstance,
}

impl From<InputDataRate> for vk::VertexInputRate {
    fn from(value: InputDataRate) -> Self {
        match value {
            InputDataRate::PerVertex => Self::Vertex,
            InputDataRate::PerInstance => Self::Instance { divisor: 1 },
        }
    }
}

/// Enumeration of data formats for [InputDataAttribute]
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputDataFormat {
    Vec3,
    Vec4,
}

impl InputDataFormat {
    /// Returns size of one element in bytes
    pub fn size(&self) -> usize {
        match self {
            InputDataFormat::Vec3 => 12,
            InputDataFormat::Vec4 => 16,
        }
    }
}

impl From<InputDataFormat> for vk::Format {
    fn from(value: InputDataFormat) -> Self {
        match value {
            InputDataFormat::Vec3 => Self::R32G32B32_SFLOAT,
            InputDataFormat::Vec4 => Self::R32G32B32A32_SFLOAT,
        }
    }
}

/// Input attribute definition in the [InputDataBinding]
#[derive(Clone)]
pub struct InputDataAttribute {
    /// Attribute location
    pub location: u32,
    /// Attribute offset
    pub offset: usize,
    /// Attribute format
    pub format: InputDataFormat,
}

/// Input definition of the vertex stage
#[derive(Clone)]
pub struct InputDataBinding {
    /// Stride of input
    pub stride: usize,
    /// Input data rate
    pub rate: InputDataRate,
    /// Attributes of this binding
    pub attributes: Vec<InputDataAttribute>,
}

impl InputDataBinding {
    /// Returns the canonical binding of [VertexIn] records: attribute 0 is
    /// the position, attribute 1 is the color
    pub fn vertex_in() -> Self {
        InputDataBinding {
            stride: mem::size_of::<VertexIn>(),
            rate: InputDataRate::PerVertex,
            attributes: vec![
                InputDataAttribute {
                    location: 0,
                    offset: mem::offset_of!(VertexIn, position),
                    format: InputDataFormat::Vec3,
                },
                InputDataAttribute {
                    location: 1,
                    offset: mem::offset_of!(VertexIn, color),
                    format: InputDataFormat::Vec4,
                },
            ],
        }
    }
}

impl From<&InputDataBinding> for vk::VertexInputState {
    fn from(value: &InputDataBinding) -> Self {
        let binding = vk::VertexInputBindingDescription {
            stride: value.stride as u32,
            input_rate: value.rate.into(),

            ..Default::default()
        };

        vk::VertexInputState {
            bindings: once((0, binding)).collect(),

            attributes: value
                .attributes
                .iter()
                .map(|attribute| {
                    let description = vk::VertexInputAttributeDescription {
                        binding: 0,
                        offset: attribute.offset as u32,
                        format: attribute.format.into(),

                        ..Default::default()
                    };

                    (attribute.location, description)
                })
                .collect(),

            ..Default::default()
        }
    }
}
