use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-signal weights for the aggregate score.
///
/// The aggregate is `surface·s + token·t + phonetic·p`. Weights are not
/// required to sum to 1, but the default set does so the score stays in
/// `[0, 1]`. A zero phonetic weight skips the phonetic signal entirely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SignalWeights {
    /// Weight of the character-level (Jaro-Winkler) signal.
    pub surface: f64,
    /// Weight of the TF-IDF cosine token signal.
    pub token: f64,
    /// Weight of the phonetic signal.
    pub phonetic: f64,
}

impl SignalWeights {
    pub const fn new(surface: f64, token: f64, phonetic: f64) -> Self {
        Self {
            surface,
            token,
            phonetic,
        }
    }

    /// Upper bound of the aggregate score under these weights.
    pub fn total(&self) -> f64 {
        self.surface + self.token + self.phonetic
    }

    pub fn phonetic_enabled(&self) -> bool {
        self.phonetic > 0.0
    }

    fn validate(&self) -> Result<(), MatchError> {
        for (name, value) in [
            ("surface", self.surface),
            ("token", self.token),
            ("phonetic", self.phonetic),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} weight must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self::new(0.35, 0.30, 0.35)
    }
}

/// Corpus calibration for the TF-IDF token signal.
///
/// `idf(token) = ln(total_docs / (1 + table.get(token).unwrap_or(default_idf)))`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TfIdfParams {
    /// Size of the corpus the IDF table was trained on.
    #[serde(default = "TfIdfParams::default_total_docs")]
    pub total_docs: f64,
    /// Table value assumed for tokens the IDF table has never seen.
    ///
    /// Kept low on purpose: an unseen token is treated as moderately common,
    /// so OCR noise and typos do not dominate the cosine.
    #[serde(default = "TfIdfParams::default_default_idf")]
    pub default_idf: f64,
}

impl TfIdfParams {
    pub(crate) fn default_total_docs() -> f64 {
        10_000.0
    }

    pub(crate) fn default_default_idf() -> f64 {
        1.0
    }
}

impl Default for TfIdfParams {
    fn default() -> Self {
        Self {
            total_docs: Self::default_total_docs(),
            default_idf: Self::default_default_idf(),
        }
    }
}

/// Configuration for a comparison.
///
/// `MatchConfig` is a plain value: bind it to a [`PlaceMatcher`](crate::PlaceMatcher)
/// once per batch, or pass it explicitly to
/// [`PlaceMatcher::evaluate`](crate::PlaceMatcher::evaluate).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    #[serde(default)]
    pub weights: SignalWeights,
    /// Decision boundary; a pair matches when `score > threshold`.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: f64,
    /// Clean names whose char counts differ by more than this never match.
    #[serde(default = "MatchConfig::default_max_length_skew")]
    pub max_length_skew: usize,
    #[serde(default)]
    pub tfidf: TfIdfParams,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> f64 {
        0.85
    }

    pub(crate) fn default_max_length_skew() -> usize {
        8
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        self.weights.validate()?;
        validate_threshold(self.threshold)?;
        if !(self.tfidf.total_docs.is_finite() && self.tfidf.total_docs > 0.0) {
            return Err(MatchError::InvalidConfig(
                "tfidf.total_docs must be greater than zero".into(),
            ));
        }
        if !(self.tfidf.default_idf.is_finite() && self.tfidf.default_idf >= 0.0) {
            return Err(MatchError::InvalidConfig(
                "tfidf.default_idf must be >= 0.0".into(),
            ));
        }
        Ok(())
    }

    /// Replace the threshold after validating it.
    pub fn set_threshold(&mut self, threshold: f64) -> Result<(), MatchError> {
        validate_threshold(threshold)?;
        self.threshold = threshold;
        Ok(())
    }

    /// Replace all three weights after validating them.
    pub fn set_weights(&mut self, weights: SignalWeights) -> Result<(), MatchError> {
        weights.validate()?;
        self.weights = weights;
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: SignalWeights::default(),
            threshold: Self::default_threshold(),
            max_length_skew: Self::default_max_length_skew(),
            tfidf: TfIdfParams::default(),
        }
    }
}

fn validate_threshold(threshold: f64) -> Result<(), MatchError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(MatchError::InvalidConfig(format!(
            "threshold must be between 0.0 and 1.0, got {threshold}"
        )));
    }
    Ok(())
}

/// Which rule produced a [`MatchResult`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// At least one name normalized to the empty string.
    EmptyName,
    /// Clean names differ in length by more than `max_length_skew`.
    LengthSkew,
    /// Clean names are identical.
    Exact,
    /// Weighted combination of the similarity signals.
    Scored,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::EmptyName => "empty_name",
            MatchOutcome::LengthSkew => "length_skew",
            MatchOutcome::Exact => "exact",
            MatchOutcome::Scored => "scored",
        }
    }
}

/// Individual signal scores behind a [`MatchOutcome::Scored`] result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SignalScores {
    pub surface: f64,
    pub token: f64,
    /// `None` when the phonetic weight is zero and the signal was skipped.
    pub phonetic: Option<f64>,
}

/// Result of comparing two place names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Aggregate score, in `[0, weights.total()]`.
    pub score: f64,
    /// `score > threshold`.
    pub is_match: bool,
    pub outcome: MatchOutcome,
    /// Present only for [`MatchOutcome::Scored`].
    pub signals: Option<SignalScores>,
}

impl MatchResult {
    pub(crate) fn short_circuit(outcome: MatchOutcome, score: f64, threshold: f64) -> Self {
        Self {
            score,
            is_match: score > threshold,
            outcome,
            signals: None,
        }
    }
}

/// Errors produced by the matching layer.
///
/// Comparisons themselves never fail; only configuration does.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid configuration (weights, threshold, TF-IDF calibration).
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
