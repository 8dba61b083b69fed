use crate::error::{Error, Result};
use crate::math::{Matrix4, Vector4};
use crate::raster_error;
use crate::resource::Color;
use super::Shader;

/// Time-varying wave: offsets `y` by `sin(x + time)` before transforming.
#[derive(Debug, Clone, Default)]
pub struct WaveShader {
    pub transformation: Matrix4,
    /// Wave phase, advanced by the caller every frame
    pub time: f32,
}

impl WaveShader {
    pub fn new(transformation: Matrix4, time: f32) -> Self {
        Self { transformation, time }
    }
}

impl Shader for WaveShader {
    fn vertex_stage(&self, position: Vector4) -> Vector4 {
        let displaced = Vector4::new(
            position.x,
            position.y + (position.x + self.time).sin(),
            position.z,
            position.w,
        );
        self.transformation.transform(displaced)
    }

    fn fragment_stage(&self) -> Result<Color> {
        raster_error!("raster3d::WaveShader", "Fragment stage is not implemented");
        Err(Error::NotImplemented("WaveShader::fragment_stage".to_string()))
    }
}
