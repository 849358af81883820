//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a smart-heading.toml, and if present we load settings from there.
//! This provides default heading bounds, the marker tag, and file extension preferences.

use crate::degree::ResolutionBounds;
use crate::error::{Error, Result};
use crate::formats::json::JsonFormat;
use facet::Facet;
use std::fs;
use std::io;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "smart-heading.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from smart-heading.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 1)]
    /// Degree a marker starts from when it sets no `min`.
    pub min: u8,
    #[facet(default = 6)]
    /// Degree a marker stops at when it sets no `max`.
    pub max: u8,
    #[facet(default = "h".to_string())]
    /// Element tag treated as a generic heading marker.
    pub marker_tag: String,
    #[facet(default = vec!["json".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min: 1,
            max: 6,
            marker_tag: "h".to_string(),
            file_extensions: vec!["json".to_string()],
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from smart-heading.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or unusable.
    ///
    /// A missing file is normal; any other failure is logged before falling back.
    pub fn load_from(path: &Path) -> Self {
        Self::try_load_from(path)
            .unwrap_or_else(|e| {
                log::warn!("ignoring {}: {e}", path.display());
                None
            })
            .unwrap_or_default()
    }

    /// Read configuration from `path`, returning `None` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read as UTF-8 text, or does not parse.
    pub fn try_load_from(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Parse configuration from TOML text; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text cannot be deserialised.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Default bounds for markers.
    ///
    /// # Errors
    ///
    /// Returns an error if `min` or `max` lies outside 1 to 6.
    pub fn bounds(&self) -> Result<ResolutionBounds> {
        ResolutionBounds::from_values(self.min, self.max)
    }

    /// Build the JSON format these preferences describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured bounds are invalid.
    pub fn json_format(&self) -> Result<JsonFormat> {
        Ok(JsonFormat {
            marker_tag: self.marker_tag.clone(),
            defaults: self.bounds()?,
        })
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
