//! Configuration types for place-name normalization.
//!
//! This module defines [`NormalizeConfig`], which controls which steps of the
//! normalization pipeline run before names are compared.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert!(config.normalize_unicode);
//! assert!(config.canonicalize_script);
//! assert!(config.strip_punctuation);
//! ```
//!
//! ## Keeping Punctuation
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig {
//!     strip_punctuation: false,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;

/// Separator symbols stripped alongside Unicode punctuation by default.
///
/// Unicode files `$ ^ + = ¥` under the symbol categories rather than
/// punctuation, but place-name data uses them as separators. Both the
/// half-width and full-width yen signs are listed.
pub const DEFAULT_EXTRA_SYMBOLS: &str = "$^+=¥￥";

/// Configuration for the normalization pipeline.
///
/// `NormalizeConfig` is cheap to clone and serializable so it can be embedded
/// in higher-level configuration files:
///
/// ```json
/// {
///   "normalize_unicode": true,
///   "canonicalize_script": true,
///   "strip_punctuation": true,
///   "extra_symbols": "$^+=¥￥"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// If true, apply Unicode NFKC normalization before anything else.
    ///
    /// Full-width Latin letters and digits, compatibility ideographs and
    /// full-width punctuation collapse onto their canonical forms:
    ///
    /// ```text
    /// "ＡＢＣ１２３" → "ABC123"
    /// "（朝阳区）"   → "(朝阳区)"
    /// ```
    ///
    /// # Default
    ///
    /// `true`
    pub normalize_unicode: bool,

    /// If true, route the text through the configured
    /// [`ScriptConverter`](crate::ScriptConverter) (e.g. traditional to
    /// simplified Chinese) before stopwords are removed.
    ///
    /// # Default
    ///
    /// `true`
    pub canonicalize_script: bool,

    /// If true, remove Unicode punctuation and every character of
    /// [`extra_symbols`](Self::extra_symbols).
    ///
    /// # Default
    ///
    /// `true`
    pub strip_punctuation: bool,

    /// Additional symbol characters removed together with punctuation.
    ///
    /// Must not contain whitespace, letters or digits.
    ///
    /// # Default
    ///
    /// [`DEFAULT_EXTRA_SYMBOLS`]
    pub extra_symbols: String,
}

impl NormalizeConfig {
    /// Validate the configuration.
    ///
    /// ```rust
    /// use canonical::NormalizeConfig;
    ///
    /// let bad = NormalizeConfig {
    ///     extra_symbols: "a".into(),
    ///     ..Default::default()
    /// };
    /// assert!(bad.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), NormalizeError> {
        if let Some(ch) = self
            .extra_symbols
            .chars()
            .find(|ch| ch.is_whitespace() || ch.is_alphanumeric())
        {
            return Err(NormalizeError::InvalidConfig(format!(
                "extra_symbols must not contain whitespace or alphanumerics, found {ch:?}"
            )));
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            canonicalize_script: true,
            strip_punctuation: true,
            extra_symbols: DEFAULT_EXTRA_SYMBOLS.to_string(),
        }
    }
}
