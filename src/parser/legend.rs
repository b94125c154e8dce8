//! Legend line parsing.

use crate::codec::ColourCodec;
use crate::error::Result;
use crate::types::Colour;

/// Parse a `key = colour` line.
///
/// Returns `Ok(None)` when the line does not have the legend shape (no `=`,
/// or the left side is not an identifier). A well-shaped line with a bad
/// colour is an error.
pub fn parse_legend_line(line: &str, codec: &ColourCodec) -> Result<Option<(String, Colour)>> {
    let Some((key, value)) = line.split_once('=') else {
        return Ok(None);
    };

    let key = key.trim();
    if !is_identifier(key) {
        return Ok(None);
    }

    let colour = codec.parse(value)?;
    Ok(Some((key.to_string(), colour)))
}

/// A letter followed by letters, digits or underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
