/// Resource module - pixel planes and mesh data consumed by the pipeline

pub mod color;
pub mod texture;
pub mod depth_buffer;
pub mod render_target;
pub mod vertex_buffer;

pub use color::Color;
pub use texture::Texture;
pub use depth_buffer::DepthBuffer;
pub use render_target::RenderTarget;
pub use vertex_buffer::VertexBuffer;
