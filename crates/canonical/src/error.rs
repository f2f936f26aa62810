use thiserror::Error;

/// Failure reported by an external text capability (script conversion,
/// segmentation, phonetic transcription).
///
/// Callers inside this workspace never propagate it: a failed capability
/// degrades to unchanged text or an empty token sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{capability} failed: {message}")]
pub struct CapabilityError {
    /// Short name of the capability, e.g. `"script"` or `"segment"`.
    pub capability: &'static str,
    /// Human-readable failure detail.
    pub message: String,
}

impl CapabilityError {
    pub fn new(capability: &'static str, message: impl Into<String>) -> Self {
        Self {
            capability,
            message: message.into(),
        }
    }
}

/// Errors produced while validating normalization settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
