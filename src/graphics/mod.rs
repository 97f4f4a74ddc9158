pub mod color;
pub mod shader;

pub use color::Color;
pub use shader::{Shader, ShaderCompiler, ShaderError, ShaderSource, ShaderSourceLoader, ShaderStage};
