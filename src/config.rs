//! YAML configuration file support.
//!
//! One file describes where the resources live, how names are normalized and
//! how the signals are combined. Every section is optional.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # placematch configuration
//! version: "1.0"
//! name: "poi-dedup"
//!
//! resources:
//!   stopwords: "resources/stopwords.txt"
//!   idf: "resources/idf_map.txt"
//!
//! normalize:
//!   normalize_unicode: true
//!   canonicalize_script: true
//!   strip_punctuation: true
//!   extra_symbols: "$^+=¥￥"
//!
//! matcher:
//!   threshold: 0.85
//!   max_length_skew: 8
//!   weights:
//!     surface: 0.35
//!     token: 0.30
//!     phonetic: 0.35
//!   tfidf:
//!     total_docs: 10000
//!     default_idf: 1.0
//! ```
//!
//! Relative resource paths in a file loaded with
//! [`PlaceMatchConfig::from_file`] are resolved against the file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use canonical::NormalizeConfig;
use matcher::{MatchConfig, PlaceMatcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resources::{ResourcePaths, ResourceStore};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PlaceMatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub resources: ResourcePaths,

    #[serde(default)]
    pub normalize: NormalizeConfig,

    #[serde(default)]
    pub matcher: MatchConfig,
}

impl PlaceMatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&content)?;
        if let Some(base) = path.parent() {
            config.resources = resolve_paths(&config.resources, base);
        }
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PlaceMatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.normalize
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;

        Ok(())
    }

    /// Load the configured resources (logging any fallback) and build a
    /// ready matcher with default capabilities.
    pub fn build_matcher(&self) -> Result<PlaceMatcher, ConfigLoadError> {
        let loaded = ResourceStore::load(&self.resources);
        loaded
            .store
            .matcher()
            .with_normalize_config(self.normalize.clone())
            .and_then(|m| m.with_config(self.matcher.clone()))
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))
    }
}

impl Default for PlaceMatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            resources: ResourcePaths::default(),
            normalize: NormalizeConfig::default(),
            matcher: MatchConfig::default(),
        }
    }
}

fn resolve_paths(paths: &ResourcePaths, base: &Path) -> ResourcePaths {
    let resolve = |p: &Option<PathBuf>| {
        p.as_ref().map(|p| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.clone()
            }
        })
    };
    ResourcePaths {
        stopwords: resolve(&paths.stopwords),
        idf: resolve(&paths.idf),
    }
}
