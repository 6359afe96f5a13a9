//! Configuration to acknowledge notebook conventions as well as set defaults.
//!
//! Specifically, we try to find a labnote.toml, and if present we load settings from there.
//! This provides the fallback query, the generated-title tag, file extensions and log level.

use crate::error::{Error, Result};
use crate::front_matter::{QueryStyle, FALLBACK_QUERY, GENERATED_TITLE_TAG};
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the configuration file looked for in the working directory.
pub const CONFIG_FILE: &str = "labnote.toml";

#[derive(Facet, Clone, Debug)]
/// Notebook preferences loaded from labnote.toml or falling back to defaults.
pub struct Config {
    #[facet(default = FALLBACK_QUERY.to_string())]
    /// Query sent when a document has no title.
    pub fallback_query: String,
    #[facet(default = GENERATED_TITLE_TAG.to_string())]
    /// Tag stripped from generated titles.
    pub generated_title_tag: String,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "warn".to_string())]
    /// Minimum log level when no `-v` flag is given.
    pub log_level: String,
}

impl Config {
    /// Load configuration from labnote.toml in the working directory if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific file, using defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::from_toml(""),
            Err(err) => Err(err.into()),
        }
    }

    /// Decode configuration from TOML text; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not valid for this schema.
    pub fn from_toml(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|err| Error::Config(err.to_string()))
    }

    #[must_use]
    /// The query style these settings describe.
    pub fn query_style(&self) -> QueryStyle {
        QueryStyle {
            fallback: self.fallback_query.clone(),
            generated_tag: self.generated_title_tag.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
