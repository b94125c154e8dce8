//! Import command: encode a PNG as a coding.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::read_png;
use crate::types::Coding;

use super::write_text;

/// Encode a PNG as a coding
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// PNG file to encode
    pub file: PathBuf,

    /// Write the coding here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Fail when the image has more distinct colours than this
    #[arg(long)]
    pub max_colours: Option<usize>,
}

pub fn run(args: ImportArgs, config: &Config, printer: &Printer) -> Result<()> {
    let codec = config.codec()?;
    let (raster, colours) = read_png(&args.file, args.max_colours)?;
    let coding = Coding::from_raster(&raster, &colours)?;
    let text = coding.to_text_with(&config.text_options(&codec));

    printer.status(
        "Imported",
        &format!(
            "{} ({}x{}, {})",
            display_path(&args.file),
            raster.width(),
            raster.height(),
            plural(colours.len(), "colour", "colours")
        ),
    );

    match &args.output {
        Some(output) => {
            write_text(output, &text)?;
            printer.status("Wrote", &printer.cyan(&display_path(output)));
        }
        None => print!("{}", text),
    }

    Ok(())
}
