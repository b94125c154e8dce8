pub mod check;
pub mod completions;
pub mod fmt;
pub mod import;
pub mod raster;
pub mod render;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::codec::ColourCodec;
use crate::config::Config;
use crate::error::{PxError, Result};
use crate::types::Coding;

/// pixcode - Pixel-art codings to rasters and back
#[derive(Parser, Debug)]
#[command(name = "pixcode")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ./pixcode.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse and validate coding files
    Check(check::CheckArgs),

    /// Print a coding in canonical form
    Fmt(fmt::FmtArgs),

    /// Print a coding's raster as JSON
    Raster(raster::RasterArgs),

    /// Render a coding to PNG
    Render(render::RenderArgs),

    /// Encode a PNG as a coding
    Import(import::ImportArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read and parse a coding file.
pub fn read_coding(path: &Path, codec: &ColourCodec) -> Result<Coding> {
    let text = fs::read_to_string(path).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read coding: {}", e),
    })?;

    Coding::parse_with(&text, codec)
}

/// Write text output to a file.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write file: {}", e),
    })
}

/// Load the config named on the command line, or the discovered one.
pub fn load_config(explicit: Option<&PathBuf>) -> Result<Config> {
    Config::resolve(explicit)
}
