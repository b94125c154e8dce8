use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pixcode operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pixcode::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pixcode::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid colour {input:?}: {reason}")]
    #[diagnostic(
        code(pixcode::colour),
        help("Use #rgb, #rrggbb[aa], rgb(r,g,b), rgba(r,g,b,a) or a colour name")
    )]
    InvalidColour { input: String, reason: String },

    #[error("Invalid program item {item:?} at row #{row}: {reason}")]
    #[diagnostic(code(pixcode::program::item))]
    InvalidProgramItem {
        item: String,
        row: usize,
        reason: String,
    },

    #[error("Empty program at row #{row}")]
    #[diagnostic(code(pixcode::program::empty))]
    EmptyProgramRow { row: usize },

    #[error("Expecting row #{expected} of the program, found row #{found}")]
    #[diagnostic(code(pixcode::program::sequence))]
    RowSequence { expected: i64, found: i64 },

    #[error("Unknown colour {key:?} at row #{row}")]
    #[diagnostic(
        code(pixcode::program::unknown_colour),
        help("Define the key in the legend section, e.g. `k = black`")
    )]
    UnknownColourKey { key: String, row: usize },

    #[error("Line {line}: {source}")]
    #[diagnostic(code(pixcode::parse))]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: Box<PxError>,
    },

    #[error("Raster error: {message}")]
    #[diagnostic(code(pixcode::raster))]
    Raster {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(pixcode::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pixcode::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PxError {
    /// Attach the source line a fatal parse error came from.
    pub(crate) fn at_line(self, line: usize, text: &str) -> Self {
        PxError::Parse {
            line,
            text: text.to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error, without line context.
    pub fn root(&self) -> &PxError {
        match self {
            PxError::Parse { source, .. } => source.root(),
            other => other,
        }
    }

    /// Source line of a parse error, if known.
    pub fn line(&self) -> Option<usize> {
        match self {
            PxError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_unwraps_parse_context() {
        let err = PxError::RowSequence {
            expected: 3,
            found: 4,
        }
        .at_line(7, "4 = 2a");

        assert_eq!(err.line(), Some(7));
        assert!(matches!(
            err.root(),
            PxError::RowSequence {
                expected: 3,
                found: 4
            }
        ));
    }

    #[test]
    fn test_display_includes_line() {
        let err = PxError::EmptyProgramRow { row: 2 }.at_line(5, "2 =");
        assert_eq!(err.to_string(), "Line 5: Empty program at row #2");
    }

    #[test]
    fn test_root_of_plain_error_is_itself() {
        let err = PxError::UnknownColourKey {
            key: "c".to_string(),
            row: 1,
        };
        assert_eq!(err.line(), None);
        assert!(matches!(err.root(), PxError::UnknownColourKey { row: 1, .. }));
    }
}
