pub mod assets;
pub mod config;
pub mod gpu;
pub mod graphics;
pub mod surface;

// Re-export commonly used types
pub use assets::{AssetReader, DirAssetBundle, MemoryAssetBundle};
pub use config::{GlesConfig, ShaderConfig};
pub use gpu::{GlBinding, GlowBinding, GpuBinding};
pub use graphics::color::Color;
pub use graphics::shader::{
    Shader, ShaderCompiler, ShaderError, ShaderSource, ShaderSourceLoader, ShaderStage, StageSource,
};
pub use surface::{FnRenderer, GlContext, GlesSurface, Size, SurfaceConfig, SurfaceRenderer};
