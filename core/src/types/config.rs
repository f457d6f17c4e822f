use crate::error::ConfigError;
use crate::normalize::PunctuationMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result ceiling applied when a query asks for no particular size.
pub const DEFAULT_LIMIT: usize = 100;

/// Index configuration, optionally persisted as TOML.
///
/// ```toml
/// limit = 50
/// index_parts = true
/// stopwords = ["the", "inc"]
/// punctuation = "remove"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Result count used when a query asks for 0 or more than this. Pinned
    /// values count against it and are always returned in full; what is
    /// left is the budget for fresh matches.
    pub limit: usize,
    /// Also index every trailing word sequence of a key, not only the full key.
    pub index_parts: bool,
    /// Raw stopwords; normalized once when the index is built.
    pub stopwords: Vec<String>,
    /// Punctuation handling of the default normalizer.
    pub punctuation: PunctuationMode,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            index_parts: false,
            stopwords: Vec::new(),
            punctuation: PunctuationMode::default(),
        }
    }
}

impl IndexConfig {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Loads and validates config from a TOML file. Returns default config if
    /// file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ConfigError::Invalid(errors.join("; ")));
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.limit == 0 {
            errors.push("limit must be at least 1".to_string());
        }

        if self.stopwords.iter().any(|word| word.trim().is_empty()) {
            errors.push("stopwords must not be blank".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        Self {
            limit: if self.limit == 0 {
                DEFAULT_LIMIT
            } else {
                self.limit
            },
            index_parts: self.index_parts,
            stopwords: self
                .stopwords
                .iter()
                .filter(|word| !word.trim().is_empty())
                .cloned()
                .collect(),
            punctuation: self.punctuation,
        }
    }
}
