use crate::error::{Error, Result};
use crate::math::{Matrix4, Vector4};
use crate::raster_error;
use crate::resource::Color;
use super::Shader;

/// Flat transform shader: `position · transformation`.
///
/// Provides no fragment shading; the rasterizer's constant colors are used
/// instead (see `ColorSource`).
#[derive(Debug, Clone, Default)]
pub struct DefaultShader {
    /// Combined world · view · projection matrix
    pub transformation: Matrix4,
}

impl DefaultShader {
    pub fn new(transformation: Matrix4) -> Self {
        Self { transformation }
    }
}

impl Shader for DefaultShader {
    fn vertex_stage(&self, position: Vector4) -> Vector4 {
        self.transformation.transform(position)
    }

    fn fragment_stage(&self) -> Result<Color> {
        raster_error!("raster3d::DefaultShader", "Fragment stage is not implemented");
        Err(Error::NotImplemented("DefaultShader::fragment_stage".to_string()))
    }
}
