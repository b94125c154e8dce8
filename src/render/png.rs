//! PNG reading and writing.
//!
//! Writing turns a colour grid into an RGBA image with optional integer
//! scaling. Reading collects the exact distinct colours of an image, in the
//! order they are first seen, and indexes every pixel into that list.

use std::collections::HashMap;
use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PxError, Result};
use crate::types::{Colour, Raster};

/// Build an RGBA image from rows of colours, scaled by an integer factor.
///
/// Rows are expected to share the same length.
pub fn to_image(pixels: &[Vec<Colour>], scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let height = pixels.len();
    let width = pixels.first().map_or(0, Vec::len);

    if width == 0 || height == 0 {
        return Err(PxError::Raster {
            message: "nothing to render: the coding has no pixels".to_string(),
            help: Some("Add at least one program row".to_string()),
        });
    }

    let to_u32 = |n: usize| {
        u32::try_from(n)
            .ok()
            .and_then(|n| n.checked_mul(scale))
            .ok_or_else(|| PxError::Raster {
                message: format!("image of {}x{} at scale {} is too large", width, height, scale),
                help: None,
            })
    };

    let mut img: RgbaImage = ImageBuffer::new(to_u32(width)?, to_u32(height)?);

    for (y, row) in pixels.iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    Ok(img)
}

/// Write rows of colours to a PNG file.
pub fn write_png(pixels: &[Vec<Colour>], path: &Path, scale: u32) -> Result<()> {
    let img = to_image(pixels, scale)?;

    img.save(path).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })
}

/// Index an image's pixels by their exact colours.
///
/// Colours are numbered in first-seen order, scanning rows top to bottom.
/// Fails when the image has more than `max_colours` distinct colours.
pub fn from_image(img: &RgbaImage, max_colours: Option<usize>) -> Result<(Raster, Vec<Colour>)> {
    let mut colours: Vec<Colour> = Vec::new();
    let mut indices: HashMap<[u8; 4], usize> = HashMap::new();
    let mut pixels = Vec::with_capacity(img.height() as usize);

    for row in img.rows() {
        let mut line = Vec::with_capacity(img.width() as usize);
        for pixel in row {
            let rgba = pixel.0;
            let index = match indices.get(&rgba) {
                Some(&index) => index,
                None => {
                    let index = colours.len();
                    if let Some(max) = max_colours.filter(|&max| index >= max) {
                        return Err(PxError::Raster {
                            message: format!("image has more than {} distinct colours", max),
                            help: Some(
                                "Reduce the image's colours or raise --max-colours".to_string(),
                            ),
                        });
                    }
                    indices.insert(rgba, index);
                    colours.push(Colour::new(rgba[0], rgba[1], rgba[2], rgba[3]));
                    index
                }
            };
            line.push(index);
        }
        pixels.push(line);
    }

    let raster = Raster::new(img.width() as usize, img.height() as usize, pixels)?;
    Ok((raster, colours))
}

/// Read a PNG file and index its pixels by exact colour.
pub fn read_png(path: &Path, max_colours: Option<usize>) -> Result<(Raster, Vec<Colour>)> {
    let img = image::open(path)
        .map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to load image: {}", e),
        })?
        .to_rgba8();

    from_image(&img, max_colours)
}
