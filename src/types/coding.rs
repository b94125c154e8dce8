//! Coding: a palette paired with the program drawn with it.

use std::collections::HashSet;
use std::fmt::{self, Write};

use crate::codec::ColourCodec;
use crate::error::{PxError, Result};
use crate::parser;

use super::{Colour, Palette, Program, ProgramItem, ProgramRow, Raster, MAX_ROW_LENGTH};

/// Header written before the legend section.
pub const LEGEND_HEADER: &str = "// LEGENDA";

/// Header written before the program section.
pub const PROGRAM_HEADER: &str = "// PROGRAMMA";

/// Options for writing a coding as text.
#[derive(Debug, Clone, Copy)]
pub struct TextOptions<'a> {
    /// Codec used to name legend colours.
    pub codec: &'a ColourCodec,
    /// Omit the count of single-pixel runs.
    pub compact_runs: bool,
}

impl Default for TextOptions<'static> {
    fn default() -> Self {
        Self {
            codec: ColourCodec::standard(),
            compact_runs: false,
        }
    }
}

/// A validated palette and program.
///
/// Every key used by the program is defined in the palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coding {
    palette: Palette,
    program: Program,
}

impl Coding {
    /// An empty coding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair a palette with a program, checking every key is defined.
    pub fn from_parts(palette: Palette, program: Program) -> Result<Self> {
        program.check_colours(&palette)?;
        Ok(Self { palette, program })
    }

    /// Parse coding text with the standard colour codec.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, ColourCodec::standard())
    }

    /// Parse coding text, resolving colour names with `codec`.
    pub fn parse_with(text: &str, codec: &ColourCodec) -> Result<Self> {
        parser::parse_coding(text, codec)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// `(width, height)` of the drawn image.
    pub fn size(&self) -> (usize, usize) {
        self.program.size()
    }

    /// Legend keys the program never draws with, in index order.
    pub fn unused_keys(&self) -> Vec<&str> {
        let used: HashSet<&str> = self
            .program
            .rows()
            .iter()
            .flat_map(|row| row.items())
            .map(ProgramItem::key)
            .collect();

        self.palette.keys().filter(|key| !used.contains(key)).collect()
    }

    /// Index used for pixels no row covers.
    pub fn unset_index(&self) -> usize {
        self.palette.len()
    }

    /// Materialize the program as palette indices.
    ///
    /// Rows shorter than the widest row are padded with [`Self::unset_index`].
    pub fn to_raster(&self) -> Raster {
        let (width, _) = self.size();
        let unset = self.unset_index();

        let pixels = self
            .program
            .rows()
            .iter()
            .map(|row| {
                let mut line = Vec::with_capacity(width);
                for item in row.items() {
                    let index = self.palette.index_of(item.key()).unwrap_or(unset);
                    line.extend(std::iter::repeat(index).take(item.count()));
                }
                line.resize(width, unset);
                line
            })
            .collect();

        Raster::from_grid(width, self.program.rows().len(), pixels)
    }

    /// Materialize the program as colours; unset pixels are transparent.
    pub fn to_rgba(&self) -> Vec<Vec<Colour>> {
        let mut colours = self.palette.as_colour_list();
        colours.push(Colour::TRANSPARENT);

        self.to_raster()
            .rows()
            .iter()
            .map(|row| row.iter().map(|&i| colours[i]).collect())
            .collect()
    }

    /// Encode a raster whose indices refer to `colours`.
    ///
    /// Colour `i` gets the key [`synthesized_key`]`(i)`; each row becomes
    /// runs of equal indices.
    pub fn from_raster(raster: &Raster, colours: &[Colour]) -> Result<Self> {
        if raster.width() == 0 && raster.height() > 0 {
            return Err(PxError::Raster {
                message: format!("raster has {} rows but no columns", raster.height()),
                help: Some("Every program row needs at least one pixel".to_string()),
            });
        }
        if raster.width() > MAX_ROW_LENGTH {
            return Err(PxError::Raster {
                message: format!(
                    "raster is {} pixels wide, at most {} fit in a row",
                    raster.width(),
                    MAX_ROW_LENGTH
                ),
                help: None,
            });
        }

        if let Some(max) = raster.max_index() {
            if max >= colours.len() {
                return Err(PxError::Raster {
                    message: format!(
                        "pixel index {} is outside a palette of {} colours",
                        max,
                        colours.len()
                    ),
                    help: Some("Every pixel must index into the colour list".to_string()),
                });
            }
        }

        let mut palette = Palette::new();
        for (i, &colour) in colours.iter().enumerate() {
            palette.add(synthesized_key(i), colour);
        }

        let mut program = Program::new();
        for row in raster.rows() {
            program.push_row(encode_row(row));
        }

        Ok(Self { palette, program })
    }

    /// Write the canonical text: legend block, blank line, program block.
    pub fn write_to(&self, out: &mut impl Write, options: &TextOptions<'_>) -> fmt::Result {
        writeln!(out, "{}\n", LEGEND_HEADER)?;
        self.palette.write_to(out, options.codec)?;
        writeln!(out, "\n{}\n", PROGRAM_HEADER)?;
        self.program.write_to(out, options.compact_runs)
    }

    /// Canonical text with the given options.
    pub fn to_text_with(&self, options: &TextOptions<'_>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out, options);
        out
    }
}

impl fmt::Display for Coding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, &TextOptions::default())
    }
}

/// Run-length encode one row of indices.
fn encode_row(row: &[usize]) -> ProgramRow {
    let mut items: Vec<ProgramItem> = Vec::new();
    let mut run: Option<(usize, usize)> = None;

    for &index in row {
        run = match run {
            Some((current, count)) if current == index => Some((current, count + 1)),
            Some((current, count)) => {
                items.push(ProgramItem::new(count, synthesized_key(current)));
                Some((index, 1))
            }
            None => Some((index, 1)),
        };
    }
    if let Some((current, count)) = run {
        items.push(ProgramItem::new(count, synthesized_key(current)));
    }

    ProgramRow::new(items)
}

/// Key for the `index`-th colour of an encoded raster.
///
/// `a` to `z`, then `aa`, `ab`, ... so keys stay letters only.
pub fn synthesized_key(index: usize) -> String {
    let mut n = index + 1;
    let mut key = Vec::new();
    while n > 0 {
        n -= 1;
        key.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    key.reverse();
    String::from_utf8(key).unwrap_or_default()
}
