/// Shader trait - the two programmable stages of the pipeline

use crate::error::Result;
use crate::math::{Vector3, Vector4};
use crate::resource::Color;

/// Programmable stages consumed by `Device::draw`.
///
/// Uniform state (transform matrix, time, ...) lives in the implementing
/// type and is updated by the caller between draws. Shaders are shared
/// with the device behind `Arc<RwLock<_>>` and the vertex stage runs on
/// the rayon pool, hence `Send + Sync`.
pub trait Shader: Send + Sync {
    /// Object-space position (`w = 1` for mesh vertices) to clip space
    fn vertex_stage(&self, position: Vector4) -> Vector4;

    /// Color of the current fragment.
    ///
    /// # Errors
    ///
    /// `Error::NotImplemented` for shaders without fragment shading.
    fn fragment_stage(&self) -> Result<Color>;

    /// Vertex stage followed by the perspective divide and screen mapping
    fn calculate_vertex(&self, position: Vector4) -> Vector3 {
        project_to_screen(self.vertex_stage(position))
    }

    /// Alias for the fragment stage, as used by the rasterizer color policy
    fn calculate_color(&self) -> Result<Color> {
        self.fragment_stage()
    }
}

/// Clip space to screen-normalized space.
///
/// Divides by `-w` (the projection matrix stores `-z_eye` in `w`), then maps
/// X and Y from `[-1, 1]` to `[0, 1]`. Z keeps its divided value for depth
/// comparisons. `w == 0` yields non-finite coordinates, which the
/// rasterizer clamps away.
pub fn project_to_screen(clip: Vector4) -> Vector3 {
    let ndc = clip / -clip.w;
    Vector3::new((ndc.x + 1.0) * 0.5, (ndc.y + 1.0) * 0.5, ndc.z)
}

#[cfg(test)]
#[path = "shader_tests.rs"]
mod tests;
