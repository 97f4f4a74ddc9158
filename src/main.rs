use anyhow::{bail, Context, Result};
use gles_surface::{GlesConfig, ShaderSourceLoader, ShaderStage};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;

const USAGE: &str = "usage: gles-shader-check <vertex.vert> <fragment.frag> [config.toml]\n       gles-shader-check --assets <vertex-asset> <fragment-asset> [config.toml]";

fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let from_assets = args.first().map(String::as_str) == Some("--assets");
    if from_assets {
        args.remove(0);
    }
    if args.len() < 2 || args.len() > 3 {
        bail!(USAGE);
    }

    let config = match args.get(2) {
        Some(path) => GlesConfig::load(path)?,
        None => GlesConfig::default(),
    };

    let source = if from_assets {
        let bundle = config.shaders.asset_bundle();
        info!("Reading bundled assets from {}", bundle.root().display());
        ShaderSourceLoader::from_bundled_assets(&bundle, &args[0], &args[1])
    } else {
        ShaderSourceLoader::from_files(PathBuf::from(&args[0]), PathBuf::from(&args[1]))
    }
    .context("Shader sources failed validation")?;

    for stage in ShaderStage::ALL {
        let code = source.code(stage);
        info!(
            "{} shader: {} lines, {} bytes",
            stage,
            code.lines().count(),
            code.len()
        );
    }
    info!(
        "OpenGL ES {} surface, clear color {}",
        config.surface.client_version,
        config.surface.clear_color.to_hex()
    );

    Ok(())
}
