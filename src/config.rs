use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::Result;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

static BUNDLED: LazyLock<Config> = LazyLock::new(Config::compiled_default);

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub preview: PreviewConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Emphasis nested deeper than this is kept as literal text.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: 100 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Maximum preview length in characters; 0 disables truncation.
    pub max_chars: usize,
    pub ellipsis: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_chars: 80,
            ellipsis: "…".to_string(),
        }
    }
}

/// CSS classes applied to rendered elements. Empty strings omit the attribute.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct HtmlConfig {
    pub wrapper_class: String,
    pub code_class: String,
    pub code_block_class: String,
    pub quote_class: String,
    pub bullet_list_class: String,
    pub numbered_list_class: String,
}

impl Config {
    /// The configuration bundled with the crate.
    pub fn compiled_default() -> Self {
        // Syntax is checked by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Shared instance of [`Config::compiled_default`].
    pub(crate) fn bundled() -> &'static Config {
        &BUNDLED
    }

    /// Parse config from TOML text. Missing keys fall back to defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load config from a TOML file, or return the compiled default if it
    /// is missing or invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::compiled_default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {}: {}", path.display(), e);
                Self::compiled_default()
            }
        }
    }
}
