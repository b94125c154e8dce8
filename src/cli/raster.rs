//! Raster command: print a coding's index grid as JSON.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::error::{PxError, Result};
use crate::types::{Coding, Raster};

use super::read_coding;

/// Print a coding's raster as JSON
#[derive(Args, Debug)]
pub struct RasterArgs {
    /// Coding file to read
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct PaletteEntry<'a> {
    key: &'a str,
    colour: String,
}

#[derive(Debug, Serialize)]
struct RasterJson<'a> {
    palette: Vec<PaletteEntry<'a>>,
    /// Index of pixels no row covers.
    unset: usize,
    #[serde(flatten)]
    raster: Raster,
}

/// JSON document describing a coding's palette and raster.
pub fn raster_json(coding: &Coding) -> Result<String> {
    let doc = RasterJson {
        palette: coding
            .palette()
            .iter()
            .map(|(key, colour)| PaletteEntry {
                key,
                colour: colour.to_hex(),
            })
            .collect(),
        unset: coding.unset_index(),
        raster: coding.to_raster(),
    };

    serde_json::to_string_pretty(&doc).map_err(|e| PxError::Build {
        message: format!("Failed to serialize raster: {}", e),
        help: None,
    })
}

pub fn run(args: RasterArgs, config: &Config) -> Result<()> {
    let codec = config.codec()?;
    let coding = read_coding(&args.file, &codec)?;
    println!("{}", raster_json(&coding)?);
    Ok(())
}
