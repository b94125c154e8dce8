//! Line-by-line coding parser.

use crate::codec::ColourCodec;
use crate::error::{PxError, Result};
use crate::types::{Coding, Palette, Program};

use super::legend::parse_legend_line;
use super::program::parse_program_line;

/// Section the parser is currently reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `key = colour` lines.
    Legend,
    /// `<row> = <items>` lines.
    Program,
    /// Everything after the program is ignored.
    End,
}

/// State machine fed one line at a time.
///
/// A line that does not have the legend shape ends the legend and is read
/// again as a program line. A line that does not have the program shape ends
/// the program.
#[derive(Debug)]
pub struct CodingParser<'c> {
    codec: &'c ColourCodec,
    section: Section,
    palette: Palette,
    program: Program,
    last_row: i64,
}

impl<'c> CodingParser<'c> {
    pub fn new(codec: &'c ColourCodec) -> Self {
        Self {
            codec,
            section: Section::Legend,
            palette: Palette::new(),
            program: Program::new(),
            last_row: 0,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Feed one raw line. `line_no` is 1-based and only used in errors.
    pub fn feed(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            return Ok(());
        }

        loop {
            match self.section {
                Section::Legend => {
                    match parse_legend_line(line, self.codec)
                        .map_err(|e| e.at_line(line_no, raw))?
                    {
                        Some((key, colour)) => {
                            self.palette.add(key, colour);
                            return Ok(());
                        }
                        None => self.section = Section::Program,
                    }
                }
                Section::Program => match parse_program_line(line) {
                    Some((row, items)) => return self.add_row(row, items, line_no, raw),
                    None => self.section = Section::End,
                },
                Section::End => return Ok(()),
            }
        }
    }

    fn add_row(&mut self, row: i64, items: &str, line_no: usize, raw: &str) -> Result<()> {
        let expected = self.last_row + 1;
        if row != expected {
            return Err(PxError::RowSequence {
                expected,
                found: row,
            }
            .at_line(line_no, raw));
        }

        self.program
            .add_row(items, row as usize)
            .map_err(|e| e.at_line(line_no, raw))?;
        self.last_row = row;
        Ok(())
    }

    /// Finish parsing, checking every program key is in the legend.
    pub fn finish(self) -> Result<Coding> {
        Coding::from_parts(self.palette, self.program)
    }
}

/// Drop everything from the first `//`.
fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Parse a whole coding text.
pub fn parse_coding(text: &str, codec: &ColourCodec) -> Result<Coding> {
    let mut parser = CodingParser::new(codec);
    for (i, line) in text.lines().enumerate() {
        parser.feed(i + 1, line)?;
    }
    parser.finish()
}
