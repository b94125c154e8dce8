//! Program type: rows of run-length encoded pixels.

use std::fmt::{self, Write};

use crate::error::{PxError, Result};

use super::Palette;

/// Longest row a program may draw, in pixels.
pub const MAX_ROW_LENGTH: usize = 1 << 20;

/// A run of `count` pixels of the colour keyed by `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramItem {
    count: usize,
    key: String,
}

impl ProgramItem {
    /// Create an item. `count` must be at least 1.
    pub fn new(count: usize, key: impl Into<String>) -> Self {
        debug_assert!(count >= 1, "run length must be at least 1");
        Self {
            count,
            key: key.into(),
        }
    }

    /// Parse a `<digits><key>` token. `row` (1-based) is used in errors.
    ///
    /// The key is everything after the last ASCII digit; the part before it
    /// must be all digits. Without digits the count is 1.
    pub fn parse(token: &str, row: usize) -> Result<Self> {
        let invalid = |reason: &str| PxError::InvalidProgramItem {
            item: token.to_string(),
            row,
            reason: reason.to_string(),
        };

        let split = token
            .rfind(|c: char| c.is_ascii_digit())
            .map_or(0, |i| i + 1);
        let (digits, key) = token.split_at(split);

        if key.is_empty() {
            return Err(invalid("missing colour"));
        }

        let count = if digits.is_empty() {
            1
        } else {
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid("run length must be a number"));
            }
            digits
                .parse::<usize>()
                .map_err(|_| invalid("run length is too large"))?
        };

        if count == 0 {
            return Err(invalid("run length must be at least 1"));
        }

        Ok(Self::new(count, key))
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the item, omitting a count of 1 when `compact` is set.
    pub fn write_to(&self, out: &mut impl Write, compact: bool) -> fmt::Result {
        if compact && self.count == 1 {
            out.write_str(&self.key)
        } else {
            write!(out, "{}{}", self.count, self.key)
        }
    }
}

impl fmt::Display for ProgramItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false)
    }
}

/// Split a token into runs: a digit that follows a non-digit starts a new
/// run, so `2a1b` is `2a` then `1b`.
fn split_runs(token: &str) -> impl Iterator<Item = &str> {
    let mut starts = vec![0];
    let mut prev_digit = true;
    for (i, c) in token.char_indices() {
        let digit = c.is_ascii_digit();
        if digit && !prev_digit {
            starts.push(i);
        }
        prev_digit = digit;
    }
    starts.push(token.len());

    let bounds: Vec<(usize, usize)> = starts.windows(2).map(|w| (w[0], w[1])).collect();
    bounds.into_iter().map(move |(start, end)| &token[start..end])
}

/// A single row of items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramRow {
    items: Vec<ProgramItem>,
}

impl ProgramRow {
    pub fn new(items: Vec<ProgramItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ProgramItem] {
        &self.items
    }

    /// Length of the row in pixels.
    pub fn pixel_len(&self) -> usize {
        self.items
            .iter()
            .fold(0, |len, item| len.saturating_add(item.count))
    }

    pub fn write_to(&self, out: &mut impl Write, compact: bool) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            item.write_to(out, compact)?;
        }
        Ok(())
    }
}

impl fmt::Display for ProgramRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false)
    }
}

/// Ordered rows describing an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    rows: Vec<ProgramRow>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a row's items and append it.
    ///
    /// `row` is the 1-based row number, used in error messages only; the
    /// caller is responsible for row sequencing.
    pub fn add_row(&mut self, text: &str, row: usize) -> Result<()> {
        let items = text
            .split_whitespace()
            .flat_map(split_runs)
            .map(|run| ProgramItem::parse(run, row))
            .collect::<Result<Vec<_>>>()?;

        if items.is_empty() {
            return Err(PxError::EmptyProgramRow { row });
        }

        let length = items
            .iter()
            .try_fold(0usize, |len, item| len.checked_add(item.count))
            .filter(|&len| len <= MAX_ROW_LENGTH);
        if length.is_none() {
            return Err(PxError::InvalidProgramItem {
                item: text.trim().to_string(),
                row,
                reason: format!("row is too long (at most {} pixels)", MAX_ROW_LENGTH),
            });
        }

        self.rows.push(ProgramRow::new(items));
        Ok(())
    }

    /// Append an already built row.
    pub fn push_row(&mut self, row: ProgramRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ProgramRow] {
        &self.rows
    }

    /// Pixel length of a row (0-based), if it exists.
    pub fn row_length(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(ProgramRow::pixel_len)
    }

    /// `(width, height)`: the longest row and the number of rows.
    pub fn size(&self) -> (usize, usize) {
        let width = self
            .rows
            .iter()
            .map(ProgramRow::pixel_len)
            .max()
            .unwrap_or(0);
        (width, self.rows.len())
    }

    /// Check that every key used is defined in the palette.
    pub fn check_colours(&self, palette: &Palette) -> Result<()> {
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(item) = row.items.iter().find(|item| !palette.has_key(&item.key)) {
                return Err(PxError::UnknownColourKey {
                    key: item.key.clone(),
                    row: i + 1,
                });
            }
        }
        Ok(())
    }

    /// Write one `<row> = <items>` line per row, numbered from 1.
    pub fn write_to(&self, out: &mut impl Write, compact: bool) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            write!(out, "{} = ", i + 1)?;
            row.write_to(out, compact)?;
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_item() {
        assert_eq!(ProgramItem::parse("12ab", 1).unwrap(), ProgramItem::new(12, "ab"));
        assert_eq!(ProgramItem::parse("a", 1).unwrap(), ProgramItem::new(1, "a"));
        assert_eq!(ProgramItem::parse("01b", 1).unwrap(), ProgramItem::new(1, "b"));
        assert_eq!(ProgramItem::parse("3A_x", 1).unwrap(), ProgramItem::new(3, "A_x"));
    }

    #[test]
    fn test_split_runs() {
        assert_eq!(split_runs("2a1b").collect::<Vec<_>>(), vec!["2a", "1b"]);
        assert_eq!(split_runs("a2b").collect::<Vec<_>>(), vec!["a", "2b"]);
        assert_eq!(split_runs("12ab").collect::<Vec<_>>(), vec!["12ab"]);
        assert_eq!(split_runs("x1").collect::<Vec<_>>(), vec!["x", "1"]);
    }

    #[test]
    fn test_parse_item_errors() {
        for token in ["12", "0a", "a2b", "99999999999999999999999a"] {
            let err = ProgramItem::parse(token, 4).unwrap_err();
            assert!(
                matches!(&err, PxError::InvalidProgramItem { item, row: 4, .. } if item == token),
                "{token}: {err}"
            );
        }
    }

    #[test]
    fn test_add_row_with_concatenated_runs() {
        let mut program = Program::new();
        program.add_row("2a1b", 1).unwrap();

        assert_eq!(
            program.rows()[0].items(),
            &[ProgramItem::new(2, "a"), ProgramItem::new(1, "b")]
        );
    }

    #[test]
    fn test_add_row_rejects_bad_runs() {
        for text in ["12", "2a 0b", "x1", "3a 4"] {
            let mut program = Program::new();
            assert!(
                matches!(
                    program.add_row(text, 5),
                    Err(PxError::InvalidProgramItem { row: 5, .. })
                ),
                "{text}"
            );
        }
    }

    #[test]
    fn test_add_row_rejects_overlong_rows() {
        for text in [
            "18446744073709551615a 1a",
            "100000000000a",
            "1048576a 1b",
        ] {
            let mut program = Program::new();
            assert!(
                matches!(
                    program.add_row(text, 1),
                    Err(PxError::InvalidProgramItem { row: 1, .. })
                ),
                "{text}"
            );
            assert_eq!(program.size(), (0, 0));
        }

        let mut program = Program::new();
        program.add_row("1048575a 1b", 1).unwrap();
        assert_eq!(program.size(), (MAX_ROW_LENGTH, 1));
    }

    #[test]
    fn test_pixel_len_saturates() {
        let row = ProgramRow::new(vec![
            ProgramItem::new(usize::MAX, "a"),
            ProgramItem::new(1, "a"),
        ]);
        assert_eq!(row.pixel_len(), usize::MAX);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "run length must be at least 1")]
    fn test_new_item_rejects_zero_count() {
        ProgramItem::new(0, "a");
    }

    #[test]
    fn test_add_row_and_size() {
        let mut program = Program::new();
        program.add_row("2a 1b", 1).unwrap();
        program.add_row("  a   4b ", 2).unwrap();

        assert_eq!(program.size(), (5, 2));
        assert_eq!(program.row_length(0), Some(3));
        assert_eq!(program.row_length(1), Some(5));
        assert_eq!(program.row_length(2), None);
    }

    #[test]
    fn test_empty_program_size() {
        assert_eq!(Program::new().size(), (0, 0));
    }

    #[test]
    fn test_add_row_rejects_empty() {
        let mut program = Program::new();
        assert!(matches!(
            program.add_row("   ", 3),
            Err(PxError::EmptyProgramRow { row: 3 })
        ));
        assert!(program.rows().is_empty());
    }

    #[test]
    fn test_add_row_does_not_keep_partial_rows() {
        let mut program = Program::new();
        assert!(program.add_row("2a 0b", 1).is_err());
        assert_eq!(program.size(), (0, 0));
    }

    #[test]
    fn test_check_colours() {
        let mut palette = Palette::new();
        palette.add("a", Colour::BLACK);
        palette.add("b", Colour::WHITE);

        let mut program = Program::new();
        program.add_row("2a 1b", 1).unwrap();
        assert!(program.check_colours(&palette).is_ok());

        program.add_row("1a 1c", 2).unwrap();
        match program.check_colours(&palette) {
            Err(PxError::UnknownColourKey { key, row }) => {
                assert_eq!(key, "c");
                assert_eq!(row, 2);
            }
            other => panic!("expected unknown colour, got {other:?}"),
        }
    }

    #[test]
    fn test_display_always_writes_counts() {
        let mut program = Program::new();
        program.add_row("2a b", 1).unwrap();
        program.add_row("a", 2).unwrap();

        assert_eq!(program.to_string(), "1 = 2a 1b\n2 = 1a\n");
    }

    #[test]
    fn test_compact_writing_omits_single_counts() {
        let mut program = Program::new();
        program.add_row("2a 1b", 1).unwrap();

        let mut out = String::new();
        program.write_to(&mut out, true).unwrap();
        assert_eq!(out, "1 = 2a b\n");
    }
}
