use crate::error::Result;
use crate::math::{Matrix4, Vector4};
use crate::resource::Color;
use super::Shader;

/// Flat transform plus a uniform fragment color.
///
/// Used with `ColorSource::FragmentStage` to color triangles from the shader
/// instead of the device's constant fill color.
#[derive(Debug, Clone, Default)]
pub struct SolidColorShader {
    pub transformation: Matrix4,
    pub color: Color,
}

impl SolidColorShader {
    pub fn new(transformation: Matrix4, color: Color) -> Self {
        Self { transformation, color }
    }
}

impl Shader for SolidColorShader {
    fn vertex_stage(&self, position: Vector4) -> Vector4 {
        self.transformation.transform(position)
    }

    fn fragment_stage(&self) -> Result<Color> {
        Ok(self.color)
    }
}
