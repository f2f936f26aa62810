//! Word segmentation capability feeding the token signal.

use std::sync::Arc;

use canonical::CapabilityError;
use once_cell::sync::Lazy;
use unicode_segmentation::UnicodeSegmentation;

/// Splits a clean name into word-like tokens.
///
/// Implementations must be deterministic within a process and total. They
/// should not emit whitespace-only tokens.
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Result<Vec<String>, CapabilityError>;
}

/// UAX #29 word boundaries. Latin words stay whole; each Han ideograph becomes
/// its own token, which makes this a character-unigram model for Chinese.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl Segmenter for UnicodeWordSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        Ok(text.unicode_words().map(str::to_string).collect())
    }
}

/// Dictionary + HMM Chinese segmentation via `jieba-rs`.
///
/// Building the dictionary takes a noticeable moment; construct one segmenter
/// and share it.
#[cfg(feature = "jieba")]
pub struct JiebaSegmenter {
    jieba: jieba_rs::Jieba,
}

#[cfg(feature = "jieba")]
impl JiebaSegmenter {
    pub fn new() -> Self {
        Self {
            jieba: jieba_rs::Jieba::new(),
        }
    }
}

#[cfg(feature = "jieba")]
impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "jieba")]
impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<String>, CapabilityError> {
        Ok(self
            .jieba
            .cut(text, true)
            .into_iter()
            .filter(|token| !token.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

static DEFAULT_SEGMENTER: Lazy<Arc<dyn Segmenter>> = Lazy::new(|| {
    #[cfg(feature = "jieba")]
    {
        Arc::new(JiebaSegmenter::new())
    }
    #[cfg(not(feature = "jieba"))]
    {
        Arc::new(UnicodeWordSegmenter)
    }
});

/// Jieba when the `jieba` feature is enabled, Unicode word boundaries otherwise.
///
/// One instance per process; every call returns a handle to the same
/// segmenter, so the dictionary is built at most once.
pub fn default_segmenter() -> Arc<dyn Segmenter> {
    Arc::clone(&DEFAULT_SEGMENTER)
}
