//! Palette type: ordered, keyed colour collection.

use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::codec::ColourCodec;

use super::Colour;

/// A collection of keyed colours with dense indices in first-seen order.
///
/// The index of a key is its position in insertion order. That index is the
/// pixel value used in rasters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    /// Key -> colour
    colours: HashMap<String, Colour>,

    /// Keys in insertion order
    order: Vec<String>,

    /// Key -> position in `order`
    indices: HashMap<String, usize>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a keyed colour.
    ///
    /// Keeps the first colour when the key already exists. Returns whether
    /// the key was new.
    pub fn add(&mut self, key: impl Into<String>, colour: Colour) -> bool {
        let key = key.into();
        if self.colours.contains_key(&key) {
            return false;
        }

        self.indices.insert(key.clone(), self.order.len());
        self.colours.insert(key.clone(), colour);
        self.order.push(key);
        true
    }

    /// Check if the palette has a colour with the given key.
    pub fn has_key(&self, key: &str) -> bool {
        self.colours.contains_key(key)
    }

    /// Get a colour by key.
    pub fn get(&self, key: &str) -> Option<Colour> {
        self.colours.get(key).copied()
    }

    /// Get a colour by index.
    pub fn get_index(&self, index: usize) -> Option<Colour> {
        self.order.get(index).and_then(|key| self.get(key))
    }

    /// Index of a key, if present.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.indices.get(key).copied()
    }

    /// Key at an index, if present.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.order.get(index).map(|s| s.as_str())
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in index order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|s| s.as_str())
    }

    /// `(key, colour)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.order
            .iter()
            .map(move |key| (key.as_str(), self.colours[key]))
    }

    /// Colours in index order.
    ///
    /// Raster index `len()` is one past the end; callers that need a colour
    /// for unset pixels append their own.
    pub fn as_colour_list(&self) -> Vec<Colour> {
        self.iter().map(|(_, colour)| colour).collect()
    }

    /// Write one `key = colour` line per entry, in index order.
    pub fn write_to(&self, out: &mut impl Write, codec: &ColourCodec) -> fmt::Result {
        for (key, colour) in self.iter() {
            writeln!(out, "{} = {}", key, codec.to_name(colour))?;
        }
        Ok(())
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, ColourCodec::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn red() -> Colour {
        Colour::rgb(255, 0, 0)
    }

    fn blue() -> Colour {
        Colour::rgb(0, 0, 255)
    }

    #[test]
    fn test_first_definition_wins() {
        let mut palette = Palette::new();
        assert!(palette.add("a", red()));
        assert!(!palette.add("a", blue()));

        assert_eq!(palette.get("a"), Some(red()));
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_indices_follow_insertion_order() {
        let mut palette = Palette::new();
        palette.add("z", red());
        palette.add("a", blue());
        palette.add("z", blue());

        assert_eq!(palette.index_of("z"), Some(0));
        assert_eq!(palette.index_of("a"), Some(1));
        assert_eq!(palette.index_of("q"), None);
        assert_eq!(palette.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert_eq!(palette.key_at(1), Some("a"));
    }

    #[test]
    fn test_lookup_by_index() {
        let mut palette = Palette::new();
        palette.add("a", red());
        palette.add("b", blue());

        assert_eq!(palette.get_index(0), Some(red()));
        assert_eq!(palette.get_index(1), Some(blue()));
        assert_eq!(palette.get_index(2), None);
        assert!(palette.has_key("b"));
        assert!(!palette.has_key("c"));
    }

    #[test]
    fn test_as_colour_list() {
        let mut palette = Palette::new();
        assert!(palette.is_empty());
        palette.add("b", blue());
        palette.add("a", red());

        assert_eq!(palette.as_colour_list(), vec![blue(), red()]);
    }

    #[test]
    fn test_display_writes_names() {
        let mut palette = Palette::new();
        palette.add("a", red());
        palette.add("b", Colour::rgb(0x12, 0x34, 0x56));
        palette.add("c", Colour::new(0, 0, 255, 0));

        assert_eq!(
            palette.to_string(),
            "a = rosso\nb = rgb(18,52,86)\nc = rgba(0,0,255,0)\n"
        );
    }
}
