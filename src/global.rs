//! Process-wide convenience API.
//!
//! One [`PlaceMatcher`] per process, either installed explicitly with
//! [`install`] or built from the bundled resources on first use. The match
//! configuration lives beside it in a lock; every call takes one snapshot
//! at its start, so a concurrent [`set_threshold`] or [`set_weights`] never
//! tears a comparison in flight. It may still land between two calls, so
//! batches that need one configuration throughout should take
//! [`config_snapshot`] and call [`PlaceMatcher::evaluate`] themselves.

use std::sync::{OnceLock, RwLock};

use matcher::{MatchConfig, MatchError, MatchResult, PlaceMatcher, SignalWeights};
use tracing::info;

use crate::resources::ResourceStore;

static MATCHER: OnceLock<PlaceMatcher> = OnceLock::new();
static CONFIG: OnceLock<RwLock<MatchConfig>> = OnceLock::new();

/// Install the process-wide matcher.
///
/// Fails, handing the matcher back, if one is already in place (installed
/// earlier or created by a previous call into this module).
pub fn install(matcher: PlaceMatcher) -> Result<(), PlaceMatcher> {
    MATCHER.set(matcher)
}

/// The process-wide matcher, creating the default one if needed.
pub fn matcher() -> &'static PlaceMatcher {
    MATCHER.get_or_init(|| {
        let matcher = ResourceStore::bundled().matcher();
        info!(
            stopwords = matcher.normalizer().stopwords().len(),
            idf_entries = matcher.idf_table().len(),
            "default_matcher_initialized"
        );
        matcher
    })
}

fn config_lock() -> &'static RwLock<MatchConfig> {
    CONFIG.get_or_init(|| RwLock::new(matcher().config().clone()))
}

/// Copy of the current configuration.
pub fn config_snapshot() -> MatchConfig {
    config_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

/// Restore the installed matcher's own configuration.
pub fn reset_config() {
    let defaults = matcher().config().clone();
    let mut guard = config_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = defaults;
}

/// Set the decision threshold. Values outside `[0, 1]` are rejected and
/// leave the configuration untouched.
pub fn set_threshold(threshold: f64) -> Result<(), MatchError> {
    let mut guard = config_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.set_threshold(threshold)
}

/// Set the surface, token and phonetic weights together.
pub fn set_weights(surface: f64, token: f64, phonetic: f64) -> Result<(), MatchError> {
    let mut guard = config_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.set_weights(SignalWeights::new(surface, token, phonetic))
}

pub fn is_same_place(name1: &str, name2: &str) -> MatchResult {
    let config = config_snapshot();
    matcher().evaluate(name1, name2, &config)
}

pub fn match_degree(name1: &str, name2: &str) -> f64 {
    is_same_place(name1, name2).score
}

pub fn match_names(name1: &str, name2: &str) -> bool {
    is_same_place(name1, name2).is_match
}
