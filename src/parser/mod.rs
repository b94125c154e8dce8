//! Parser for coding text.
//!
//! A coding is read line by line. `//` starts a comment and blank lines are
//! skipped. The legend comes first:
//!
//! ```text
//! // LEGENDA
//! a = rosso
//! b = #00f
//! ```
//!
//! The first line that is not `key = colour` starts the program, one
//! numbered row per line:
//!
//! ```text
//! // PROGRAMMA
//! 1 = 2a 1b
//! 2 = 1a 2b
//! ```
//!
//! Rows must be numbered 1, 2, 3, ... in order. The first line that is not
//! `<row> = <items>` ends the program and the rest of the text is ignored.

mod coding;
mod legend;
mod program;

pub use coding::{parse_coding, CodingParser, Section};
pub use legend::{is_identifier, parse_legend_line};
pub use program::parse_program_line;
