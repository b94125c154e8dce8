//! Project configuration (pixcode.yaml).
//!
//! ```yaml
//! aliases:
//!   rouge: red
//! compact_runs: true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::{Aliases, ColourCodec};
use crate::error::{PxError, Result};
use crate::types::TextOptions;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "pixcode.yaml";

/// Configuration loaded from pixcode.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extra localized colour names, mapped to standard colour names.
    /// These are added on top of the built-in aliases.
    pub aliases: BTreeMap<String, String>,

    /// Omit the count of single-pixel runs when writing codings.
    pub compact_runs: bool,
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PxError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `pixcode.yaml` from `dir` if it exists, the defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit config file, or discover one in the working directory.
    pub fn resolve(explicit: Option<&PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(Path::new(".")),
        }
    }

    /// Build a colour codec from the built-in aliases plus the configured ones.
    pub fn codec(&self) -> Result<ColourCodec> {
        let mut aliases = Aliases::builtin();
        for (alias, name) in &self.aliases {
            aliases
                .insert(alias, name)
                .map_err(|message| PxError::Config {
                    message,
                    help: Some(
                        "Aliases must be plain names mapped to standard colours, e.g. `rouge: red`"
                            .to_string(),
                    ),
                })?;
        }
        Ok(ColourCodec::with_aliases(aliases))
    }

    /// Options for writing codings.
    pub fn text_options<'a>(&self, codec: &'a ColourCodec) -> TextOptions<'a> {
        TextOptions {
            codec,
            compact_runs: self.compact_runs,
        }
    }
}
