//! Standard and localized colour names.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::types::Colour;

use super::grammar::{self, Match};

/// The SVG/CSS named colours, sorted by name.
///
/// When several names share a value (`aqua`/`cyan`, `gray`/`grey`, ...) the
/// first one in this table is the one written back out.
const STANDARD: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

/// Built-in localized (Italian) names and the standard name each stands for.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("arancione", "orange"),
    ("azzurro", "azure"),
    ("bianco", "white"),
    ("blu", "blue"),
    ("blu chiaro", "lightblue"),
    ("giallo", "yellow"),
    ("grigio", "gray"),
    ("marrone", "brown"),
    ("nero", "black"),
    ("rosa", "pink"),
    ("rosso", "red"),
    ("verde", "green"),
    ("viola", "violet"),
];

static BY_NAME: LazyLock<HashMap<&'static str, Colour>> = LazyLock::new(|| {
    STANDARD
        .iter()
        .map(|&(name, rgb)| (name, from_rgb24(rgb)))
        .collect()
});

static BY_COLOUR: LazyLock<HashMap<Colour, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &(name, rgb) in STANDARD {
        map.entry(from_rgb24(rgb)).or_insert(name);
    }
    map
});

fn from_rgb24(rgb: u32) -> Colour {
    Colour::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Look up a standard colour name (lower-case).
pub fn standard_colour(name: &str) -> Option<Colour> {
    BY_NAME.get(name).copied()
}

/// Reverse lookup: the standard name for an exact colour.
pub fn standard_name(colour: Colour) -> Option<&'static str> {
    BY_COLOUR.get(&colour).copied()
}

/// Alias table mapping localized names to standard names, both ways.
#[derive(Debug, Clone)]
pub struct Aliases {
    to_standard: BTreeMap<String, String>,
    from_standard: HashMap<String, String>,
}

impl Aliases {
    /// An empty alias table.
    pub fn empty() -> Self {
        Self {
            to_standard: BTreeMap::new(),
            from_standard: HashMap::new(),
        }
    }

    /// The built-in Italian table.
    pub fn builtin() -> Self {
        let mut aliases = Self::empty();
        for &(alias, name) in DEFAULT_ALIASES {
            aliases.insert_unchecked(alias.to_string(), name.to_string());
        }
        aliases
    }

    /// Add an alias. The target must be a standard colour name.
    ///
    /// A later alias for the same standard name becomes the one used when
    /// writing colours back out.
    pub fn insert(&mut self, alias: &str, name: &str) -> Result<(), String> {
        let alias = alias.trim().to_lowercase();
        let name = name.trim().to_lowercase();

        if alias.is_empty() {
            return Err("alias must not be empty".to_string());
        }
        if standard_colour(&name).is_none() {
            return Err(format!("{:?} is not a standard colour name", name));
        }
        if alias.contains("//") || alias.contains('=') {
            return Err(format!("alias {:?} cannot contain `//` or `=`", alias));
        }
        let empty = Aliases::empty();
        if grammar::match_hex(&alias, &empty) != Match::NoMatch
            || grammar::match_functional(&alias, &empty) != Match::NoMatch
        {
            return Err(format!("alias {:?} reads as a colour value", alias));
        }
        if alias != name && standard_colour(&alias).is_some() {
            return Err(format!("alias {:?} is already a standard colour name", alias));
        }

        self.insert_unchecked(alias, name);
        Ok(())
    }

    fn insert_unchecked(&mut self, alias: String, name: String) {
        if let Some(previous) = self.to_standard.get(&alias) {
            if self.from_standard.get(previous) == Some(&alias) {
                self.from_standard.remove(previous);
            }
        }
        self.from_standard.insert(name.clone(), alias.clone());
        self.to_standard.insert(alias, name);
    }

    /// Standard name an alias stands for.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        self.to_standard.get(alias).map(|s| s.as_str())
    }

    /// Localized name preferred for a standard name.
    pub fn localize(&self, name: &str) -> Option<&str> {
        self.from_standard.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.to_standard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_standard.is_empty()
    }

    /// Iterate aliases in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.to_standard
            .iter()
            .map(|(alias, name)| (alias.as_str(), name.as_str()))
    }
}

impl Default for Aliases {
    fn default() -> Self {
        Self::builtin()
    }
}
