//! Fmt command: rewrite a coding in canonical form.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};

use super::{read_coding, write_text};

/// Print a coding in canonical form
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Coding file to format
    pub file: PathBuf,

    /// Rewrite the file in place instead of printing
    #[arg(long, short)]
    pub write: bool,
}

/// Canonical text of a coding file.
pub fn format_file(path: &Path, config: &Config) -> Result<String> {
    let codec = config.codec()?;
    let coding = read_coding(path, &codec)?;
    Ok(coding.to_text_with(&config.text_options(&codec)))
}

pub fn run(args: FmtArgs, config: &Config, printer: &Printer) -> Result<()> {
    let text = format_file(&args.file, config)?;

    if args.write {
        write_text(&args.file, &text)?;
        printer.status("Formatted", &display_path(&args.file));
    } else {
        print!("{}", text);
    }

    Ok(())
}
