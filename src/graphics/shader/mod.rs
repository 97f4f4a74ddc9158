// shader - Shader source acquisition and compilation

pub mod compiler;
pub mod loader;

pub use compiler::ShaderCompiler;
pub use loader::ShaderSourceLoader;

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("The {stage} shader file extension must be .{}: {}", .stage.extension(), .path.display())]
    InvalidExtension { stage: ShaderStage, path: PathBuf },
    #[error("Empty {0} shader code")]
    EmptySource(ShaderStage),
    #[error("Could not read shader source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Expected one vertex and one fragment source")]
    StageMismatch,
    #[error("Could not create {stage} shader: {message}")]
    Creation { stage: ShaderStage, message: String },
    #[error("The {stage} shader failed to compile: {log}")]
    Compilation { stage: ShaderStage, log: String },
}

/// A programmable pipeline stage handled by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// File suffix, without the dot, that marks a source file for this stage.
    pub fn extension(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vert",
            ShaderStage::Fragment => "frag",
        }
    }

    /// Infers the stage from the file name's `.vert`/`.frag` suffix.
    ///
    /// Matches on the name text, so a bare `.vert` counts as well.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        Self::ALL.into_iter().find(|stage| {
            name.strip_suffix(stage.extension())
                .map_or(false, |rest| rest.ends_with('.'))
        })
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A text blob tagged with the stage it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSource {
    pub stage: ShaderStage,
    pub code: String,
}

impl StageSource {
    pub fn new(stage: ShaderStage, code: impl Into<String>) -> Self {
        Self {
            stage,
            code: code.into(),
        }
    }
}

/// Validated vertex and fragment source text, ready for compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    vertex_code: String,
    fragment_code: String,
}

impl ShaderSource {
    /// Fails with [`ShaderError::EmptySource`] if either text is empty,
    /// checking the vertex stage first.
    pub fn new(
        vertex_code: impl Into<String>,
        fragment_code: impl Into<String>,
    ) -> Result<Self, ShaderError> {
        let vertex_code = vertex_code.into();
        let fragment_code = fragment_code.into();

        if vertex_code.is_empty() {
            return Err(ShaderError::EmptySource(ShaderStage::Vertex));
        }
        if fragment_code.is_empty() {
            return Err(ShaderError::EmptySource(ShaderStage::Fragment));
        }

        Ok(Self {
            vertex_code,
            fragment_code,
        })
    }

    /// Pairs two tagged blobs supplied in any order.
    pub fn from_stages(first: StageSource, second: StageSource) -> Result<Self, ShaderError> {
        match (first.stage, second.stage) {
            (ShaderStage::Vertex, ShaderStage::Fragment) => Self::new(first.code, second.code),
            (ShaderStage::Fragment, ShaderStage::Vertex) => Self::new(second.code, first.code),
            _ => Err(ShaderError::StageMismatch),
        }
    }

    pub fn vertex_code(&self) -> &str {
        &self.vertex_code
    }

    pub fn fragment_code(&self) -> &str {
        &self.fragment_code
    }

    pub fn code(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex_code,
            ShaderStage::Fragment => &self.fragment_code,
        }
    }
}

/// Compiled shader handles, owned by the caller.
///
/// Nothing here releases the handles; delete them through the binding that
/// created them once they are no longer needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shader<H> {
    pub vertex: H,
    pub fragment: H,
}

impl<H: Copy> Shader<H> {
    pub fn handle(&self, stage: ShaderStage) -> H {
        match stage {
            ShaderStage::Vertex => self.vertex,
            ShaderStage::Fragment => self.fragment,
        }
    }
}
