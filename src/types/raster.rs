//! Raster of palette indices.

use serde::Serialize;

use crate::error::{PxError, Result};

/// A `width × height` grid of palette indices, stored row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Vec<usize>>,
}

impl Raster {
    /// Create a raster, checking the grid matches the given size.
    pub fn new(width: usize, height: usize, pixels: Vec<Vec<usize>>) -> Result<Self> {
        if pixels.len() != height {
            return Err(PxError::Raster {
                message: format!("expected {} rows, found {}", height, pixels.len()),
                help: None,
            });
        }
        if let Some((y, row)) = pixels.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(PxError::Raster {
                message: format!("row {} has {} pixels, expected {}", y, row.len(), width),
                help: None,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap a grid already known to be `width × height`.
    pub(crate) fn from_grid(width: usize, height: usize, pixels: Vec<Vec<usize>>) -> Self {
        debug_assert!(pixels.len() == height && pixels.iter().all(|row| row.len() == width));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a raster from rows, taking the size from the first row.
    pub fn from_rows(pixels: Vec<Vec<usize>>) -> Result<Self> {
        let width = pixels.first().map_or(0, Vec::len);
        let height = pixels.len();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Index at `(x, y)`, if inside the raster.
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.pixels
    }

    /// Largest index used, if any pixel exists.
    pub fn max_index(&self) -> Option<usize> {
        self.pixels.iter().flatten().copied().max()
    }

    pub fn into_rows(self) -> Vec<Vec<usize>> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_shape() {
        assert!(Raster::new(2, 1, vec![vec![0, 1]]).is_ok());
        assert!(Raster::new(2, 2, vec![vec![0, 1]]).is_err());
        assert!(Raster::new(3, 1, vec![vec![0, 1]]).is_err());
    }

    #[test]
    fn test_from_rows() {
        let raster = Raster::from_rows(vec![vec![0, 0, 1], vec![0, 1, 1]]).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.get(2, 0), Some(1));
        assert_eq!(raster.get(3, 0), None);
        assert_eq!(raster.max_index(), Some(1));

        assert!(Raster::from_rows(vec![vec![0], vec![0, 1]]).is_err());
    }

    #[test]
    fn test_empty_raster() {
        let raster = Raster::from_rows(vec![]).unwrap();
        assert_eq!((raster.width(), raster.height()), (0, 0));
        assert_eq!(raster.max_index(), None);
    }

    #[test]
    fn test_serializes_as_json() {
        let raster = Raster::from_rows(vec![vec![0, 1]]).unwrap();
        let json = serde_json::to_string(&raster).unwrap();
        assert_eq!(json, r#"{"width":2,"height":1,"pixels":[[0,1]]}"#);
    }
}
