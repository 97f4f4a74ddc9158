use super::{ShaderError, ShaderSource, ShaderStage, StageSource};
use crate::assets::AssetReader;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Acquires vertex and fragment source text from files or asset bundles.
///
/// Every check runs before anything reaches the GPU.
pub struct ShaderSourceLoader;

impl ShaderSourceLoader {
    /// Loads a `.vert`/`.frag` file pair.
    ///
    /// Both suffixes are checked before either file is read.
    pub fn from_files<P, Q>(vertex_path: P, fragment_path: Q) -> Result<ShaderSource, ShaderError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let vertex_path = vertex_path.as_ref();
        let fragment_path = fragment_path.as_ref();

        check_extension(ShaderStage::Vertex, vertex_path)?;
        check_extension(ShaderStage::Fragment, fragment_path)?;

        let vertex_code = read_file(vertex_path)?;
        let fragment_code = read_file(fragment_path)?;

        let source = ShaderSource::new(vertex_code, fragment_code)?;
        debug!(
            "Loaded shader sources {} ({} bytes) and {} ({} bytes)",
            vertex_path.display(),
            source.vertex_code().len(),
            fragment_path.display(),
            source.fragment_code().len()
        );
        Ok(source)
    }

    /// Loads a pair from an asset bundle.
    ///
    /// Unlike [`from_files`](Self::from_files) the asset paths are not checked
    /// for stage suffixes.
    pub fn from_bundled_assets<A>(
        asset_reader: &A,
        vertex_asset_path: &str,
        fragment_asset_path: &str,
    ) -> Result<ShaderSource, ShaderError>
    where
        A: AssetReader + ?Sized,
    {
        let vertex_code = read_asset(asset_reader, vertex_asset_path)?;
        let fragment_code = read_asset(asset_reader, fragment_asset_path)?;

        let source = ShaderSource::new(vertex_code, fragment_code)?;
        debug!(
            "Loaded bundled shader sources {} and {}",
            vertex_asset_path, fragment_asset_path
        );
        Ok(source)
    }

    /// Loads two files whose stages are taken from their suffixes, in any order.
    pub fn from_stage_files<P, Q>(first: P, second: Q) -> Result<ShaderSource, ShaderError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let first = first.as_ref();
        let second = second.as_ref();

        let first_stage = stage_of(first)?;
        let second_stage = stage_of(second)?;
        if first_stage == second_stage {
            return Err(ShaderError::StageMismatch);
        }

        ShaderSource::from_stages(
            StageSource::new(first_stage, read_file(first)?),
            StageSource::new(second_stage, read_file(second)?),
        )
    }
}

fn check_extension(stage: ShaderStage, path: &Path) -> Result<(), ShaderError> {
    if ShaderStage::from_path(path) == Some(stage) {
        Ok(())
    } else {
        Err(ShaderError::InvalidExtension {
            stage,
            path: path.to_path_buf(),
        })
    }
}

// A suffix naming neither stage is reported against the vertex stage.
fn stage_of(path: &Path) -> Result<ShaderStage, ShaderError> {
    ShaderStage::from_path(path).ok_or_else(|| ShaderError::InvalidExtension {
        stage: ShaderStage::Vertex,
        path: path.to_path_buf(),
    })
}

fn read_file(path: &Path) -> Result<String, ShaderError> {
    fs::read_to_string(path).map_err(|source| ShaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_asset<A: AssetReader + ?Sized>(reader: &A, path: &str) -> Result<String, ShaderError> {
    reader.read_text(path).map_err(|source| ShaderError::Io {
        path: PathBuf::from(path),
        source,
    })
}
