//! Core domain types for pixcode.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - keyed colours with dense indices
//! - `Program` - run-length encoded pixel rows
//! - `Raster` - grid of palette indices
//! - `Coding` - a palette and the program drawn with it

pub mod colour;
mod coding;
mod palette;
mod program;
mod raster;

pub use coding::{synthesized_key, Coding, TextOptions, LEGEND_HEADER, PROGRAM_HEADER};
pub use colour::Colour;
pub use palette::Palette;
pub use program::{Program, ProgramItem, ProgramRow, MAX_ROW_LENGTH};
pub use raster::Raster;
