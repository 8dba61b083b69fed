/// Renderer module - rasterizer and the device that drives it

pub mod render_modes;
pub mod drawer;
pub mod device;

pub use render_modes::{RenderModes, ColorSource};
pub use drawer::{Drawer, DEFAULT_FILL_COLOR, DEFAULT_LINE_COLOR};
pub use device::{Device, DeviceDesc, ActiveTarget, RenderTargetKey};
