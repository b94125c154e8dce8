//! pixcode - Pixel-art codings
//!
//! A coding is a small text format describing a low-resolution image: a
//! legend of keyed colours followed by numbered rows of run-length encoded
//! pixels.
//!
//! ```text
//! // LEGENDA
//! a = rosso
//! b = blu
//!
//! // PROGRAMMA
//! 1 = 2a 1b
//! 2 = 1a 2b
//! ```
//!
//! [`Coding::parse`] reads the text, [`Coding::to_raster`] turns it into a
//! grid of palette indices, and [`Coding::from_raster`] goes back. Colour
//! strings are handled by [`ColourCodec`].

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use codec::{Aliases, ColourCodec};
pub use config::Config;
pub use error::{PxError, Result};
pub use parser::{parse_coding, CodingParser, Section};
pub use render::{read_png, write_png};
pub use types::{
    synthesized_key, Coding, Colour, Palette, Program, ProgramItem, ProgramRow, Raster,
    TextOptions,
};
