mod error;
mod export;
mod idx;
mod mesh;
mod parse;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::error::ConvertError;
use crate::mesh::MeshDocument;

/// Converts a Wavefront OBJ mesh into the engine's JSON mesh resource.
#[derive(Parser, Debug)]
#[command(name = "objmesh")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Source mesh, must end in `.obj`
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Destination JSON file, overwritten if present
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

const OBJ_EXTENSION: &str = "obj";

/// Case-sensitive check that the final suffix is exactly `.obj`.
fn check_obj_suffix(path: &Path) -> error::Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(OBJ_EXTENSION) => Ok(()),
        _ => Err(ConvertError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn convert(input: &Path, output: &Path) -> Result<MeshDocument> {
    check_obj_suffix(input)?;

    info!(input = %input.display(), "parsing mesh");
    let mesh = parse::parse_file(input)
        .with_context(|| format!("failed to parse {}", input.display()))?;

    for line in export::summary(&mesh) {
        println!("{line}");
    }

    export::write_document(&mesh, output)
        .with_context(|| format!("failed to export {}", output.display()))?;
    println!("Exported to file \"{}\"", output.display());

    Ok(mesh)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    convert(&cli.input, &cli.output)?;
    Ok(())
}
