//! Terminal output for the pixcode CLI.
//!
//! Status lines go to stderr with a right-aligned verb column; stdout is
//! reserved for codings, JSON and other machine-readable output.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Status printer. Colour is enabled when stderr is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self::with_color(io::stderr().is_terminal())
    }

    pub fn with_color(color: bool) -> Self {
        Self { color }
    }

    /// e.g. "     Checked sprite.txt (8x12, 3 colours)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Format a string as cyan (for paths).
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn format_line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let line = self.format_line(color, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }
}

/// Pluralize a count: `plural(1, "colour", "colours")` → "1 colour".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "colour", "colours"), "1 colour");
        assert_eq!(plural(0, "row", "rows"), "0 rows");
        assert_eq!(plural(5, "row", "rows"), "5 rows");
    }

    #[test]
    fn test_plain_line_is_right_aligned() {
        let printer = Printer::with_color(false);
        assert_eq!(
            printer.format_line(GREEN, "Checked", "a.txt"),
            "     Checked a.txt"
        );
        assert_eq!(printer.cyan("a.txt"), "a.txt");
    }

    #[test]
    fn test_coloured_line() {
        let printer = Printer::with_color(true);
        assert_eq!(
            printer.format_line(RED, "Failed", "a.txt"),
            "\x1b[1m\x1b[31m      Failed\x1b[0m a.txt"
        );
        assert_eq!(printer.dim("x"), "\x1b[2mx\x1b[0m");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }
}
