/// Shader module - programmable vertex/fragment stages

mod shader;
mod default_shader;
mod wave_shader;
mod solid_color_shader;

pub use shader::{Shader, project_to_screen};
pub use default_shader::DefaultShader;
pub use wave_shader::WaveShader;
pub use solid_color_shader::SolidColorShader;
