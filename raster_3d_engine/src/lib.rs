/*!
# Raster 3D Engine

A CPU-only 3D rasterizer: indexed triangle meshes go in, a raw RGBA8 pixel
buffer comes out. No graphics driver is involved.

## Architecture

- **Device**: orchestrator owning the front/back buffers, the active shader
  and the render modes; drives `clear -> draw -> present`
- **Shader**: vertex/fragment stage trait (`DefaultShader`, `WaveShader`,
  `SolidColorShader`)
- **Drawer**: line and filled-triangle scan conversion into a render target
- **RenderTarget**: color plane plus optional depth plane
- **VertexBuffer**: flat positions with optional triangle indices
- **Math**: `glam` vectors and a row-vector `Matrix4`

The host application only consumes the bytes returned by `Device::present`.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod renderer;
pub mod resource;
pub mod shader;

// Main raster3d namespace module
pub mod raster3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Device and its configuration
    pub use crate::renderer::{Device, DeviceDesc};

    // Logging sub-module (types and configuration, macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            log, log_detailed, reset_logger, set_logger, set_min_severity, min_severity,
            DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }
}

// Re-export math library at crate root
pub use glam;
