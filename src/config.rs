//! Conversion settings
//!
//! The defaults reproduce the standard behavior: `path` elements left without
//! a fill are painted black. A TOML file can override both knobs:
//!
//! ```toml
//! default_fill = "#222"
//! default_fill_elements = ["path", "polygon"]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Default fill color for elements with no resolved fill
pub const DEFAULT_FILL: &str = "#000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InlineConfig {
    /// Fill given to elements that end up without one
    pub default_fill: String,
    /// Local names of SVG elements that receive the default fill
    pub default_fill_elements: Vec<String>,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            default_fill: DEFAULT_FILL.to_string(),
            default_fill_elements: vec!["path".to_string()],
        }
    }
}

impl InlineConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load config from TOML string; missing keys keep their defaults
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the default fill color
    pub fn with_default_fill(mut self, fill: impl Into<String>) -> Self {
        self.default_fill = fill.into();
        self
    }

    /// Set which elements receive the default fill
    pub fn with_default_fill_elements<S: Into<String>>(
        mut self,
        elements: impl IntoIterator<Item = S>,
    ) -> Self {
        self.default_fill_elements = elements.into_iter().map(Into::into).collect();
        self
    }

    /// Does an SVG element with this local name get the default fill?
    pub fn takes_default_fill(&self, local_name: &str) -> bool {
        self.default_fill_elements.iter().any(|e| e == local_name)
    }
}
