//! Place-name matching umbrella crate.
//!
//! This crate stitches together normalization (`canonical`) and scoring
//! (`matcher`) with the parts a running process needs: resource loading,
//! YAML configuration and a process-wide convenience API.
//!
//! ```no_run
//! use placematch::{global, ResourcePaths, ResourceStore};
//!
//! // Explicit: load resources once, build a matcher, share it.
//! let loaded = ResourceStore::load(&ResourcePaths::default());
//! let matcher = loaded.store.matcher();
//! let result = matcher.is_same_place("西湖风景名胜区", "西湖");
//! assert!(result.is_match);
//!
//! // Process-wide: first call builds a matcher over the bundled resources.
//! assert!(global::match_names("北京市，朝阳区！", "北京市朝阳区"));
//! ```

pub mod config;
pub mod global;
pub mod resources;

pub use canonical::{
    CapabilityError, IdentityScript, NormalizeConfig, NormalizeError, Normalizer, ScriptConverter,
    StopwordSet,
};
pub use matcher::{
    set_match_metrics, IdfParseReport, IdfTable, JaroWinkler, MatchConfig, MatchError,
    MatchMetrics, MatchOutcome, MatchResult, PhoneticTranscriber, PlaceMatcher, Segmenter,
    SignalScores, SignalWeights, TfIdfParams, UnicodeWordSegmenter, VerbatimPhonetic,
};

pub use crate::config::{ConfigLoadError, PlaceMatchConfig};
pub use crate::resources::{
    load_idf_table, load_stopwords, LoadedResources, ResourceError, ResourcePaths,
    ResourceStore, ResourceWarning,
};
