use crate::assets::DirAssetBundle;
use crate::gpu::GpuBinding;
use crate::graphics::shader::{Shader, ShaderCompiler, ShaderError, ShaderSource};
use crate::surface::SurfaceConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlesConfig {
    pub surface: SurfaceConfig,
    pub shaders: ShaderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Directory that bundled asset paths are resolved against.
    pub asset_root: PathBuf,
    /// Query compile status and fail with the info log after compiling.
    pub check_compile_status: bool,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("assets"),
            check_compile_status: false,
        }
    }
}

impl ShaderConfig {
    pub fn asset_bundle(&self) -> DirAssetBundle {
        DirAssetBundle::new(&self.asset_root)
    }

    pub fn compile<B: GpuBinding>(
        &self,
        compiler: &ShaderCompiler<B>,
        source: ShaderSource,
    ) -> Result<Shader<B::Handle>, ShaderError> {
        if self.check_compile_status {
            compiler.compile_checked(source)
        } else {
            compiler.compile(source)
        }
    }
}

impl GlesConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Loads `path`, writing the defaults there first if it does not exist.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let default_config = GlesConfig::default();
        let toml_content = toml::to_string_pretty(&default_config)?;
        std::fs::write(path, toml_content).context("Failed to write default config")?;
        Ok(default_config)
    }
}
