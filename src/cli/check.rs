//! Check command: parse and validate codings without writing anything.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::{PxError, Result};
use crate::output::{display_path, plural, Printer};

use super::read_coding;

/// Parse and validate coding files
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Coding files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, config: &Config, printer: &Printer) -> Result<()> {
    let codec = config.codec()?;
    let mut failed = 0;

    for file in &args.files {
        let display = display_path(file);

        match read_coding(file, &codec) {
            Ok(coding) => {
                let (width, height) = coding.size();
                let summary = format!(
                    "({}x{}, {})",
                    width,
                    height,
                    plural(coding.palette().len(), "colour", "colours")
                );
                printer.status("Checked", &format!("{} {}", display, printer.dim(&summary)));

                for key in coding.unused_keys() {
                    printer.warning("Unused", &format!("colour {:?} in {}", key, display));
                }
            }
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display, e));
            }
        }
    }

    if failed > 0 {
        return Err(PxError::Build {
            message: format!(
                "{} of {} failed to parse",
                failed,
                plural(args.files.len(), "file", "files")
            ),
            help: None,
        });
    }

    printer.info(
        "Finished",
        &format!("checked {}", plural(args.files.len(), "file", "files")),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_valid_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ok.txt");
        fs::write(&path, "a = red\nb = blue\n1 = 2a1b\n").unwrap();

        let args = CheckArgs { files: vec![path] };
        run(args, &Config::default(), &Printer::with_color(false)).unwrap();
    }

    #[test]
    fn test_check_reports_failures() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        let bad = dir.path().join("bad.txt");
        fs::write(&good, "a = red\n1 = a\n").unwrap();
        fs::write(&bad, "a = red\n1 = a\n3 = a\n").unwrap();

        let args = CheckArgs {
            files: vec![good, bad],
        };
        let err = run(args, &Config::default(), &Printer::with_color(false)).unwrap_err();

        assert!(matches!(err, PxError::Build { .. }));
        assert_eq!(err.to_string(), "Build error: 1 of 2 files failed to parse");
    }

    #[test]
    fn test_check_uses_config_aliases() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fr.txt");
        fs::write(&path, "a = rouge\n1 = a\n").unwrap();
        let config = Config::parse("aliases:\n  rouge: red\n").unwrap();

        let printer = Printer::with_color(false);
        let args = || CheckArgs {
            files: vec![path.clone()],
        };
        assert!(run(args(), &Config::default(), &printer).is_err());
        assert!(run(args(), &config, &printer).is_ok());
    }
}
