//! Colour type and canonical string forms.

use std::fmt;
use std::str::FromStr;

use crate::codec::ColourCodec;
use crate::error::{PxError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour, used for unset raster pixels.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Canonical hex form: `#rrggbb` or `#rrggbbaa`, collapsed to
    /// `#rgb` / `#rgba` when every byte is a doubled nibble.
    pub fn to_hex(self) -> String {
        let mut bytes = vec![self.r, self.g, self.b];
        if !self.is_opaque() {
            bytes.push(self.a);
        }

        let short = bytes.iter().all(|b| b >> 4 == b & 0x0f);

        let mut s = String::with_capacity(1 + bytes.len() * 2);
        s.push('#');
        for b in bytes {
            if short {
                s.push_str(&format!("{:x}", b & 0x0f));
            } else {
                s.push_str(&format!("{:02x}", b));
            }
        }
        s
    }

    /// Functional form: `rgb(r,g,b)` when opaque, else `rgba(r,g,b,a)`.
    ///
    /// Alpha is written as the shortest decimal fraction that parses back
    /// to the same byte.
    pub fn to_rgb(self) -> String {
        if self.is_opaque() {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({},{},{},{})",
                self.r,
                self.g,
                self.b,
                alpha_fraction(self.a)
            )
        }
    }
}

impl FromStr for Colour {
    type Err = PxError;

    fn from_str(s: &str) -> Result<Self> {
        ColourCodec::standard().parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Scale a fraction `numerator / 10^digits` to a byte, truncating.
///
/// This is the single conversion used both when reading an alpha number and
/// when choosing how to write one, so the two always agree.
pub(crate) fn fraction_to_byte(numerator: u128, digits: u32) -> u8 {
    let scaled = numerator * 255 / 10u128.pow(digits);
    scaled.min(255) as u8
}

/// Shortest decimal in `[0, 1]` whose truncated scaling yields `a`.
fn alpha_fraction(a: u8) -> String {
    match a {
        0 => return "0".to_string(),
        255 => return "1".to_string(),
        _ => {}
    }

    // 3 digits always suffice: the gap between consecutive bytes is 1/255.
    for digits in 1..=3u32 {
        let scale = 10u128.pow(digits);
        let numerator = (a as u128 * scale).div_ceil(255);
        if fraction_to_byte(numerator, digits) == a {
            return format!("0.{:0width$}", numerator, width = digits as usize);
        }
    }

    // Unreachable for u8 input, kept total.
    format!("0.{:04}", (a as u128 * 10_000).div_ceil(255))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_long_form() {
        assert_eq!(Colour::rgb(0x12, 0x34, 0x56).to_hex(), "#123456");
        assert_eq!(Colour::new(0x12, 0x34, 0x56, 0x78).to_hex(), "#12345678");
    }

    #[test]
    fn test_to_hex_shorthand() {
        assert_eq!(Colour::rgb(0x11, 0x22, 0x33).to_hex(), "#123");
        assert_eq!(Colour::new(0x11, 0x22, 0x33, 0x44).to_hex(), "#1234");
        assert_eq!(Colour::WHITE.to_hex(), "#fff");
        assert_eq!(Colour::TRANSPARENT.to_hex(), "#0000");
    }

    #[test]
    fn test_to_hex_no_shorthand_when_alpha_breaks_it() {
        assert_eq!(Colour::new(0x11, 0x22, 0x33, 0x45).to_hex(), "#11223345");
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(Colour::WHITE.to_rgb(), "rgb(255,255,255)");
        assert_eq!(Colour::rgb(1, 2, 3).to_rgb(), "rgb(1,2,3)");
        assert_eq!(Colour::new(1, 2, 3, 127).to_rgb(), "rgba(1,2,3,0.5)");
        assert_eq!(Colour::new(1, 2, 3, 128).to_rgb(), "rgba(1,2,3,0.502)");
        assert_eq!(Colour::new(1, 2, 3, 0).to_rgb(), "rgba(1,2,3,0)");
    }

    #[test]
    fn test_alpha_fraction_covers_every_byte() {
        for a in 0..=255u8 {
            let s = alpha_fraction(a);
            let (numerator, digits) = match s.split_once('.') {
                Some((_, frac)) => (frac.parse::<u128>().unwrap(), frac.len() as u32),
                None => (s.parse::<u128>().unwrap(), 0),
            };
            assert_eq!(fraction_to_byte(numerator, digits), a, "alpha {a} -> {s}");
        }
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#f00");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#ff000080");
    }

    #[test]
    fn test_from_str() {
        let c: Colour = "#F00".parse().unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));
        assert!("nope".parse::<Colour>().is_err());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Colour::BLACK, Colour::rgb(0, 0, 0));
        assert!(Colour::BLACK.is_opaque());
        assert!(!Colour::TRANSPARENT.is_opaque());
    }
}
