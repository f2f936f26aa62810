use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use tracing::warn;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::punctuation::strip_punctuation;
use crate::script::{default_script_converter, ScriptConverter};
use crate::stopwords::StopwordSet;

/// Main entry point. Turns a raw place name into a clean comparison string.
///
/// Steps, in order: NFKC (optional), script canonicalization (optional),
/// stopword removal, punctuation removal (optional), edge trimming.
///
/// Never fails. A converter error leaves the text as it was before that step,
/// and an input made only of stopwords and punctuation yields `""`.
pub fn normalize(
    raw: &str,
    stopwords: &StopwordSet,
    script: &dyn ScriptConverter,
    cfg: &NormalizeConfig,
) -> String {
    // NFKC first, it can merge characters the later steps look at.
    let text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(raw.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(raw)
    };

    let text: Cow<str> = if cfg.canonicalize_script {
        match script.to_canonical_script(&text) {
            Ok(converted) => Cow::Owned(converted),
            Err(err) => {
                warn!(error = %err, "script_conversion_failed");
                text
            }
        }
    } else {
        text
    };

    let stripped = stopwords.strip(&text);

    let cleaned = if cfg.strip_punctuation {
        strip_punctuation(&stripped, &cfg.extra_symbols)
    } else {
        stripped
    };

    let trimmed = cleaned.trim();
    if trimmed.len() == cleaned.len() {
        cleaned
    } else {
        trimmed.to_string()
    }
}

/// A ready-to-use normalizer bound to one stopword set, script converter and
/// configuration. Cheap to clone; the stopword set is shared.
#[derive(Clone)]
pub struct Normalizer {
    stopwords: Arc<StopwordSet>,
    script: Arc<dyn ScriptConverter>,
    config: NormalizeConfig,
}

impl Normalizer {
    /// Normalizer with the default script converter and configuration.
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        Self {
            stopwords,
            script: default_script_converter(),
            config: NormalizeConfig::default(),
        }
    }

    pub fn with_script_converter(mut self, script: Arc<dyn ScriptConverter>) -> Self {
        self.script = script;
        self
    }

    pub fn with_config(mut self, config: NormalizeConfig) -> Result<Self, NormalizeError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    pub fn stopwords(&self) -> &Arc<StopwordSet> {
        &self.stopwords
    }

    pub fn normalize(&self, raw: &str) -> String {
        normalize(raw, &self.stopwords, self.script.as_ref(), &self.config)
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stopwords", &self.stopwords.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
