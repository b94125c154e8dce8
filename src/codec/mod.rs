//! Colour string codec.
//!
//! Parses colour strings in hex, functional (`rgb()`/`rgba()`) or named
//! notation and writes colours back in a canonical form:
//!
//! - [`Colour::to_hex`] - shortest hex form
//! - [`Colour::to_rgb`] - functional form
//! - [`ColourCodec::to_name`] - colour name (localized when an alias exists),
//!   falling back to the functional form
//!
//! Localized names live in an [`Aliases`] table owned by the codec. The
//! standard codec uses the built-in table and is shared process-wide.

mod grammar;
mod names;

use std::sync::LazyLock;

use crate::error::{PxError, Result};
use crate::types::Colour;

pub use grammar::{Match, Matcher, NOTATIONS};
pub use names::{standard_colour, standard_name, Aliases, DEFAULT_ALIASES};

static STANDARD: LazyLock<ColourCodec> = LazyLock::new(ColourCodec::new);

/// Colour parser and writer bound to an alias table.
#[derive(Debug, Clone, Default)]
pub struct ColourCodec {
    aliases: Aliases,
}

impl ColourCodec {
    /// A codec with the built-in alias table.
    pub fn new() -> Self {
        Self::with_aliases(Aliases::builtin())
    }

    /// A codec with a custom alias table.
    pub fn with_aliases(aliases: Aliases) -> Self {
        Self { aliases }
    }

    /// The shared codec with the built-in alias table.
    pub fn standard() -> &'static ColourCodec {
        &STANDARD
    }

    pub fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Parse a colour string.
    ///
    /// Leading/trailing whitespace and letter case are ignored. Notations are
    /// tried in order (hex, functional, named); the first that claims the
    /// string decides the result.
    pub fn parse(&self, s: &str) -> Result<Colour> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(PxError::InvalidColour {
                input: s.to_string(),
                reason: "empty colour".to_string(),
            });
        }

        for (_, matcher) in NOTATIONS {
            match matcher(&normalized, &self.aliases) {
                Match::Colour(colour) => return Ok(colour),
                Match::Invalid(reason) => {
                    return Err(PxError::InvalidColour {
                        input: s.to_string(),
                        reason,
                    })
                }
                Match::NoMatch => continue,
            }
        }

        Err(PxError::InvalidColour {
            input: s.to_string(),
            reason: "unknown colour name".to_string(),
        })
    }

    /// Display name of a colour: the localized alias of its standard name,
    /// the standard name, or the functional form.
    pub fn to_name(&self, colour: Colour) -> String {
        match standard_name(colour) {
            Some(name) => self.aliases.localize(name).unwrap_or(name).to_string(),
            None => colour.to_rgb(),
        }
    }
}
