use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use canonical::{NormalizeConfig, Normalizer, ScriptConverter, StopwordSet};
use tracing::{debug, warn};

use crate::idf::IdfTable;
use crate::metrics::metrics_recorder;
use crate::phonetic::{default_transcriber, phonetic_score, PhoneticTranscriber};
use crate::segment::{default_segmenter, Segmenter};
use crate::surface::JaroWinkler;
use crate::tfidf::{tfidf_cosine, TokenFrequencyVector};
use crate::types::{MatchConfig, MatchError, MatchOutcome, MatchResult, SignalScores, TfIdfParams};


/// Decides whether two place names refer to the same place.
///
/// A matcher is built once from shared, read-only resources (stopwords, IDF
/// table) and capability objects, then used from any number of threads. Its
/// [`MatchConfig`] is fixed at construction; callers that need a different
/// configuration per call use [`PlaceMatcher::evaluate`].
#[derive(Clone)]
pub struct PlaceMatcher {
    normalizer: Normalizer,
    idf: Arc<IdfTable>,
    segmenter: Arc<dyn Segmenter>,
    transcriber: Arc<dyn PhoneticTranscriber>,
    surface: JaroWinkler,
    config: MatchConfig,
}

impl PlaceMatcher {
    /// Matcher with default capabilities, normalization and match configuration.
    pub fn new(stopwords: Arc<StopwordSet>, idf: Arc<IdfTable>) -> Self {
        Self {
            normalizer: Normalizer::new(stopwords),
            idf,
            segmenter: default_segmenter(),
            transcriber: default_transcriber(),
            surface: JaroWinkler::new(),
            config: MatchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn with_normalize_config(mut self, config: NormalizeConfig) -> Result<Self, MatchError> {
        self.normalizer = self
            .normalizer
            .with_config(config)
            .map_err(|e| MatchError::InvalidConfig(e.to_string()))?;
        Ok(self)
    }

    pub fn with_script_converter(mut self, script: Arc<dyn ScriptConverter>) -> Self {
        self.normalizer = self.normalizer.with_script_converter(script);
        self
    }

    pub fn with_segmenter(mut self, segmenter: Arc<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn with_transcriber(mut self, transcriber: Arc<dyn PhoneticTranscriber>) -> Self {
        self.transcriber = transcriber;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn idf_table(&self) -> &Arc<IdfTable> {
        &self.idf
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Clean comparison string for `raw`.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }

    /// Compare two raw names under the matcher's own configuration.
    pub fn is_same_place(&self, name1: &str, name2: &str) -> MatchResult {
        self.evaluate(name1, name2, &self.config)
    }

    /// Aggregate score only.
    pub fn match_degree(&self, name1: &str, name2: &str) -> f64 {
        self.is_same_place(name1, name2).score
    }

    /// Decision only: `score > threshold`.
    pub fn matches(&self, name1: &str, name2: &str) -> bool {
        self.is_same_place(name1, name2).is_match
    }

    /// Compare two raw names under an explicit configuration.
    ///
    /// `config` is used as given; validate it once up front when it comes
    /// from outside.
    pub fn evaluate(&self, name1: &str, name2: &str, config: &MatchConfig) -> MatchResult {
        let start = Instant::now();

        let clean1 = self.normalizer.normalize(name1);
        let clean2 = self.normalizer.normalize(name2);
        let result = self.compare_clean(&clean1, &clean2, config);

        let elapsed = start.elapsed();
        debug!(
            outcome = result.outcome.as_str(),
            score = result.score,
            is_match = result.is_match,
            elapsed_micros = elapsed.as_micros() as u64,
            "place_compare"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_comparison(result.outcome, elapsed, result.score);
        }

        result
    }

    /// Compare two already-normalized names.
    ///
    /// Rules, first applicable wins: empty name → 0, length skew → 0,
    /// identical → 1, otherwise the weighted sum of the signals.
    pub fn compare_clean(&self, clean1: &str, clean2: &str, config: &MatchConfig) -> MatchResult {
        let threshold = config.threshold;

        if clean1.is_empty() || clean2.is_empty() {
            return MatchResult::short_circuit(MatchOutcome::EmptyName, 0.0, threshold);
        }

        let skew = clean1.chars().count().abs_diff(clean2.chars().count());
        if skew > config.max_length_skew {
            return MatchResult::short_circuit(MatchOutcome::LengthSkew, 0.0, threshold);
        }

        if clean1 == clean2 {
            return MatchResult::short_circuit(MatchOutcome::Exact, 1.0, threshold);
        }

        let weights = &config.weights;
        let surface = self.surface_similarity(clean1, clean2);
        let token = self.token_similarity(clean1, clean2, &config.tfidf);
        let phonetic = if weights.phonetic_enabled() {
            Some(self.phonetic_similarity(clean1, clean2))
        } else {
            None
        };

        let score = weights.surface * surface
            + weights.token * token
            + weights.phonetic * phonetic.unwrap_or(0.0);

        MatchResult {
            score,
            is_match: score > threshold,
            outcome: MatchOutcome::Scored,
            signals: Some(SignalScores {
                surface,
                token,
                phonetic,
            }),
        }
    }

    /// Surface (Jaro-Winkler) signal over two clean names.
    pub fn surface_similarity(&self, clean1: &str, clean2: &str) -> f64 {
        self.surface.similarity(clean1, clean2)
    }

    /// TF-IDF cosine signal over two clean names.
    pub fn token_similarity(&self, clean1: &str, clean2: &str, params: &TfIdfParams) -> f64 {
        let tf1 = TokenFrequencyVector::from_tokens(self.segment(clean1));
        let tf2 = TokenFrequencyVector::from_tokens(self.segment(clean2));
        tfidf_cosine(&tf1, &tf2, &self.idf, params)
    }

    /// Phonetic signal over two clean names.
    pub fn phonetic_similarity(&self, clean1: &str, clean2: &str) -> f64 {
        phonetic_score(clean1, clean2, self.transcriber.as_ref(), &self.surface)
    }

    /// Score many pairs; results come back in input order.
    ///
    /// Runs on the rayon pool when the `parallel` feature is enabled.
    pub fn score_pairs<A, B>(&self, pairs: &[(A, B)]) -> Vec<MatchResult>
    where
        A: AsRef<str> + Sync,
        B: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(a, b)| self.is_same_place(a.as_ref(), b.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|(a, b)| self.is_same_place(a.as_ref(), b.as_ref()))
                .collect()
        }
    }

    fn segment(&self, text: &str) -> Vec<String> {
        match self.segmenter.segment(text) {
            Ok(tokens) => tokens,
            Err(err) => {
                warn!(error = %err, "segmentation_failed");
                Vec::new()
            }
        }
    }
}

impl fmt::Debug for PlaceMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceMatcher")
            .field("normalizer", &self.normalizer)
            .field("idf_entries", &self.idf.len())
            .field("surface", &self.surface)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
