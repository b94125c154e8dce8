//! Image boundary: codings to PNG and PNG back to rasters.

mod png;

pub use png::{from_image, read_png, to_image, write_png};
