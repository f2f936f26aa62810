//! Place-name normalization layer.
//!
//! This crate turns a raw place name into the clean string every similarity
//! signal compares. Downstream scorers assume their inputs went through here.
//!
//! ## What we do
//!
//! - Unicode normalization (NFKC by default, configurable)
//! - Script canonicalization through a pluggable [`ScriptConverter`]
//!   (traditional to simplified Chinese with the `zhconv` feature)
//! - Administrative stopword removal, longest stopword first
//! - Punctuation and separator-symbol stripping
//! - Edge whitespace trimming
//!
//! ## Total function
//!
//! Normalization never fails. Input consisting only of stopwords and
//! punctuation yields an empty string, which callers treat as a degenerate
//! name rather than an error.
//!
//! ```rust
//! use std::sync::Arc;
//! use canonical::{IdentityScript, Normalizer, StopwordSet};
//!
//! let stopwords = Arc::new(StopwordSet::new(["风景名胜区", "National Park"]));
//! let normalizer = Normalizer::new(stopwords).with_script_converter(Arc::new(IdentityScript));
//!
//! assert_eq!(normalizer.normalize("西湖风景名胜区"), "西湖");
//! assert_eq!(normalizer.normalize("  Yosemite National Park! "), "Yosemite");
//! ```

mod config;
mod error;
mod pipeline;
mod punctuation;
mod script;
mod stopwords;

pub use crate::config::{NormalizeConfig, DEFAULT_EXTRA_SYMBOLS};
pub use crate::error::{CapabilityError, NormalizeError};
pub use crate::pipeline::{normalize, Normalizer};
pub use crate::punctuation::strip_punctuation;
#[cfg(feature = "zhconv")]
pub use crate::script::SimplifiedChinese;
pub use crate::script::{default_script_converter, IdentityScript, ScriptConverter};
pub use crate::stopwords::{contains_latin, StopwordSet, FALLBACK_STOPWORDS};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct FailingScript;

    impl ScriptConverter for FailingScript {
        fn to_canonical_script(&self, _text: &str) -> Result<String, CapabilityError> {
            Err(CapabilityError::new("script", "dictionary unavailable"))
        }
    }

    struct UppercaseScript;

    impl ScriptConverter for UppercaseScript {
        fn to_canonical_script(&self, text: &str) -> Result<String, CapabilityError> {
            Ok(text.to_uppercase())
        }
    }

    fn normalizer(words: &[&str]) -> Normalizer {
        Normalizer::new(Arc::new(StopwordSet::new(words.iter().copied())))
            .with_script_converter(Arc::new(IdentityScript))
    }

    #[test]
    fn stopwords_then_punctuation_then_trim() {
        let n = normalizer(&["风景名胜区", "国家重点"]);
        assert_eq!(n.normalize("  国家重点·西湖风景名胜区！ "), "西湖");
    }

    #[test]
    fn punctuation_only_differences_vanish() {
        let n = normalizer(&[]);
        assert_eq!(n.normalize("北京市，朝阳区！"), n.normalize("北京市朝阳区"));
    }

    #[test]
    fn entirely_stopword_input_is_empty() {
        let n = normalizer(&FALLBACK_STOPWORDS);
        assert_eq!(n.normalize("国家重点风景名胜区"), "");
    }

    #[test]
    fn empty_and_control_input_never_fail() {
        let n = normalizer(&["路"]);
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("\u{0}\t "), "\u{0}");
        assert_eq!(n.normalize("。，、"), "");
    }

    #[test]
    fn nfkc_folds_fullwidth_forms() {
        let n = normalizer(&[]);
        assert_eq!(n.normalize("ＡＢＣ１２３"), "ABC123");
        assert_eq!(n.normalize("（朝阳区）"), "朝阳区");
    }

    #[test]
    fn nfkc_can_be_disabled() {
        let n = normalizer(&[])
            .with_config(NormalizeConfig {
                normalize_unicode: false,
                ..Default::default()
            })
            .expect("valid config");
        assert_eq!(n.normalize("ＡＢＣ"), "ＡＢＣ");
    }

    #[test]
    fn punctuation_can_be_kept() {
        let n = normalizer(&[])
            .with_config(NormalizeConfig {
                strip_punctuation: false,
                ..Default::default()
            })
            .expect("valid config");
        assert_eq!(n.normalize(" St. Louis "), "St. Louis");
    }

    #[test]
    fn script_runs_before_stopwords() {
        // Stopwords are stored in canonical script, so conversion must come first.
        let n = normalizer(&["PARK"]).with_script_converter(Arc::new(UppercaseScript));
        assert_eq!(n.normalize("central park"), "CENTRAL");
    }

    #[test]
    fn failing_script_converter_keeps_text() {
        let n = normalizer(&["景区"]).with_script_converter(Arc::new(FailingScript));
        assert_eq!(n.normalize("黄山景区"), "黄山");
    }

    #[test]
    fn script_step_can_be_disabled() {
        let n = normalizer(&[])
            .with_script_converter(Arc::new(UppercaseScript))
            .with_config(NormalizeConfig {
                canonicalize_script: false,
                ..Default::default()
            })
            .expect("valid config");
        assert_eq!(n.normalize("lhasa"), "lhasa");
    }

    #[test]
    fn invalid_config_rejected() {
        let res = normalizer(&[]).with_config(NormalizeConfig {
            extra_symbols: "x".into(),
            ..Default::default()
        });
        assert!(matches!(res, Err(NormalizeError::InvalidConfig(_))));
    }

    #[cfg(feature = "zhconv")]
    #[test]
    fn traditional_input_meets_simplified_stopwords() {
        let n = Normalizer::new(Arc::new(StopwordSet::new(["风景名胜区"])))
            .with_script_converter(Arc::new(SimplifiedChinese));
        assert_eq!(n.normalize("西湖風景名勝區"), "西湖");
    }

    #[test]
    fn deterministic_output() {
        let n = normalizer(&FALLBACK_STOPWORDS);
        let inputs = ["", "北京路", "Fifth Avenue", "香港特别行政区"];
        for input in inputs {
            assert_eq!(n.normalize(input), n.normalize(input));
        }
    }
}
