//! Colour notations.
//!
//! Each notation is a matcher over a trimmed, lower-cased string. A matcher
//! either claims the string (and yields a colour or a reason it is
//! malformed) or declines it so the next notation can try.

use crate::types::colour::fraction_to_byte;
use crate::types::Colour;

use super::names::{self, Aliases};

/// Outcome of a single notation matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    /// The string is in this notation and is valid.
    Colour(Colour),
    /// The string is in this notation but malformed.
    Invalid(String),
    /// The string is not in this notation.
    NoMatch,
}

/// A notation matcher.
pub type Matcher = fn(&str, &Aliases) -> Match;

/// Notations in precedence order.
pub const NOTATIONS: &[(&str, Matcher)] = &[
    ("hex", match_hex),
    ("functional", match_functional),
    ("named", match_named),
];

/// `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`.
pub fn match_hex(s: &str, _aliases: &Aliases) -> Match {
    let Some(hex) = s.strip_prefix('#') else {
        return Match::NoMatch;
    };

    if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Match::Invalid(format!("invalid hex digit {:?}", c));
    }

    // All ASCII from here on, so byte indexing is safe.
    let nibble = |i: usize| hex_value(hex.as_bytes()[i]);
    let byte = |i: usize| nibble(i) << 4 | nibble(i + 1);

    let colour = match hex.len() {
        3 => Colour::rgb(nibble(0) * 17, nibble(1) * 17, nibble(2) * 17),
        4 => Colour::new(
            nibble(0) * 17,
            nibble(1) * 17,
            nibble(2) * 17,
            nibble(3) * 17,
        ),
        6 => Colour::rgb(byte(0), byte(2), byte(4)),
        8 => Colour::new(byte(0), byte(2), byte(4), byte(6)),
        n => return Match::Invalid(format!("{} hex digits, expected 3, 4, 6 or 8", n)),
    };

    Match::Colour(colour)
}

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

/// `rgb(r,g,b)`, `rgb(r,g,b,a)`, `rgba(r,g,b,a)` and their whitespace
/// separated forms.
pub fn match_functional(s: &str, _aliases: &Aliases) -> Match {
    let (function, rest) = if let Some(rest) = s.strip_prefix("rgba(") {
        ("rgba", rest)
    } else if let Some(rest) = s.strip_prefix("rgb(") {
        ("rgb", rest)
    } else {
        return Match::NoMatch;
    };

    let Some(inner) = rest.strip_suffix(')') else {
        return Match::Invalid("missing closing ')'".to_string());
    };

    let parts = match split_components(inner) {
        Ok(parts) => parts,
        Err(reason) => return Match::Invalid(reason),
    };

    match (function, parts.len()) {
        ("rgb", 3) | ("rgb", 4) | ("rgba", 4) => {}
        ("rgba", n) => {
            return Match::Invalid(format!("rgba() takes 4 components, found {}", n))
        }
        (_, n) => return Match::Invalid(format!("rgb() takes 3 or 4 components, found {}", n)),
    }

    let percent = parts[0].ends_with('%');
    if parts[..3].iter().any(|p| p.ends_with('%') != percent) {
        return Match::Invalid("channels must all be integers or all percentages".to_string());
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts[..3]) {
        let value = if percent {
            parse_percentage(part)
        } else {
            parse_channel(part)
        };
        match value {
            Some(v) => *slot = v,
            None => return Match::Invalid(format!("invalid channel value {:?}", part)),
        }
    }

    let alpha = match parts.get(3) {
        None => 255,
        Some(part) => match parse_alpha(part) {
            Some(a) => a,
            None => return Match::Invalid(format!("invalid alpha value {:?}", part)),
        },
    };

    Match::Colour(Colour::new(channels[0], channels[1], channels[2], alpha))
}

/// Split the arguments of a functional colour on commas or on whitespace.
///
/// The two styles cannot be mixed within one call.
fn split_components(inner: &str) -> Result<Vec<&str>, String> {
    if inner.contains(',') {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err("empty component".to_string());
        }
        if parts.iter().any(|p| p.contains(char::is_whitespace)) {
            return Err("commas and spaces cannot be mixed as separators".to_string());
        }
        Ok(parts)
    } else {
        let parts: Vec<&str> = inner.split_whitespace().collect();
        if parts.is_empty() {
            return Err("no components".to_string());
        }
        Ok(parts)
    }
}

/// Parse a run of ASCII digits with an upper bound.
fn parse_bounded(digits: &str, max: u32) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    // More than 3 significant digits can never fit the bounds used here.
    if significant.len() > 3 {
        return None;
    }
    let value = if significant.is_empty() {
        0
    } else {
        significant.parse::<u32>().ok()?
    };
    (value <= max).then_some(value)
}

/// Integer channel, 0 to 255.
fn parse_channel(s: &str) -> Option<u8> {
    parse_bounded(s, 255).map(|v| v as u8)
}

/// Percentage, `0%` to `100%`, scaled to 0..=255 with truncation.
fn parse_percentage(s: &str) -> Option<u8> {
    let digits = s.strip_suffix('%')?;
    let pct = parse_bounded(digits, 100)?;
    Some(fraction_to_byte(pct as u128, 2))
}

/// Most significant fraction digits accepted in an alpha number.
const MAX_ALPHA_DIGITS: usize = 30;

/// Alpha as a percentage or a number in `[0, 1]`.
///
/// Accepted numbers: `0`, `0.`, `.5`, `0.5`, `1`, `1.`, `1.000`.
fn parse_alpha(s: &str) -> Option<u8> {
    if s.ends_with('%') {
        return parse_percentage(s);
    }

    let (int_part, frac) = match s.split_once('.') {
        Some((int_part, frac)) => (int_part, frac),
        None => (s, ""),
    };
    if !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match int_part {
        "1" => frac.bytes().all(|b| b == b'0').then_some(255),
        "0" | "" => {
            if int_part.is_empty() && frac.is_empty() {
                return None;
            }
            // Trailing zeros do not change the value. The numerator must fit
            // in a u128 after scaling by 255.
            let frac = frac.trim_end_matches('0');
            if frac.len() > MAX_ALPHA_DIGITS {
                return None;
            }
            if frac.is_empty() {
                return Some(0);
            }
            let numerator = frac.parse::<u128>().ok()?;
            Some(fraction_to_byte(numerator, frac.len() as u32))
        }
        _ => None,
    }
}

/// Standard colour names, after resolving localized aliases.
pub fn match_named(s: &str, aliases: &Aliases) -> Match {
    let name = aliases.resolve(s).unwrap_or(s);
    match names::standard_colour(name) {
        Some(colour) => Match::Colour(colour),
        None => Match::NoMatch,
    }
}
