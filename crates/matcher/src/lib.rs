//! # Place-name matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the normalization layer (`canonical`). It decides
//! whether two free-text place names refer to the same place, for example
//! "西湖风景名胜区" and "杭州西湖", by combining three similarity signals over
//! the normalized names:
//!
//! - **surface**: Jaro-Winkler over the clean strings ([`JaroWinkler`]).
//! - **token**: cosine of TF-IDF weighted token vectors, with corpus IDF from
//!   an [`IdfTable`] and tokens from a pluggable [`Segmenter`].
//! - **phonetic**: Jaro-Winkler over sound-alike renderings produced by a
//!   pluggable [`PhoneticTranscriber`].
//!
//! ## Decision rules
//!
//! [`PlaceMatcher::is_same_place`] applies, in order:
//!
//! 1. either clean name empty → score 0 ([`MatchOutcome::EmptyName`])
//! 2. char-count difference above `max_length_skew` → score 0
//!    ([`MatchOutcome::LengthSkew`])
//! 3. identical clean names → score 1 ([`MatchOutcome::Exact`])
//! 4. otherwise `surface·s + token·t + phonetic·p` ([`MatchOutcome::Scored`])
//!
//! and declares a match when `score > threshold`.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use canonical::StopwordSet;
//! use matcher::{IdfTable, MatchConfig, MatchOutcome, PlaceMatcher};
//!
//! let stopwords = Arc::new(StopwordSet::new(["风景名胜区", "景区"]));
//! let idf = Arc::new(IdfTable::empty());
//! let matcher = PlaceMatcher::new(stopwords, idf)
//!     .with_config(MatchConfig { threshold: 0.8, ..Default::default() })
//!     .expect("valid config");
//!
//! let result = matcher.is_same_place("西湖风景名胜区", "西湖景区");
//! assert_eq!(result.outcome, MatchOutcome::Exact);
//! assert!(result.is_match);
//! ```
//!
//! ## Feature flags
//!
//! - `parallel` (default): [`PlaceMatcher::score_pairs`] runs on rayon.
//! - `jieba`: dictionary-based Chinese segmentation as the default segmenter.
//! - `pinyin`: toneless pinyin as the default phonetic rendering.
//!
//! ## Observability
//!
//! Every comparison emits a `debug` tracing event with its outcome, score and
//! latency. Install a [`MatchMetrics`] implementation via
//! [`set_match_metrics`] to receive the same observations in a metrics
//! backend.

pub mod engine;
pub mod idf;
pub mod metrics;
pub mod phonetic;
pub mod segment;
pub mod surface;
pub mod tfidf;
pub mod types;

pub use crate::engine::PlaceMatcher;
pub use crate::idf::{IdfParseReport, IdfTable};
pub use crate::metrics::{set_match_metrics, MatchMetrics};
#[cfg(feature = "pinyin")]
pub use crate::phonetic::PinyinTranscriber;
pub use crate::phonetic::{default_transcriber, phonetic_score, PhoneticTranscriber, VerbatimPhonetic};
#[cfg(feature = "jieba")]
pub use crate::segment::JiebaSegmenter;
pub use crate::segment::{default_segmenter, Segmenter, UnicodeWordSegmenter};
pub use crate::surface::{surface_score, JaroWinkler};
pub use crate::tfidf::{idf_weight, tfidf_cosine, token_score, TokenFrequencyVector};
pub use crate::types::{
    MatchConfig, MatchError, MatchOutcome, MatchResult, SignalScores, SignalWeights, TfIdfParams,
};
