//! Render command: draw a coding as a PNG.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::write_png;

use super::read_coding;

/// Render a coding to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Coding file to render
    pub file: PathBuf,

    /// Output PNG path
    #[arg(long, short)]
    pub output: PathBuf,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,
}

pub fn run(args: RenderArgs, config: &Config, printer: &Printer) -> Result<()> {
    let codec = config.codec()?;
    let coding = read_coding(&args.file, &codec)?;

    write_png(&coding.to_rgba(), &args.output, args.scale)?;

    let (width, height) = coding.size();
    printer.status(
        "Rendered",
        &format!(
            "{} → {} ({}x{})",
            display_path(&args.file),
            printer.cyan(&display_path(&args.output)),
            width,
            height
        ),
    );
    Ok(())
}
