//! Stopword and IDF resources shared by every matcher in the process.
//!
//! Loading never fails: a missing or unreadable file degrades to a built-in
//! default and is reported as a [`ResourceWarning`]. The fallible primitives
//! [`load_stopwords`] and [`load_idf_table`] are public for callers that want
//! to treat a missing resource as fatal.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use canonical::StopwordSet;
use matcher::{IdfParseReport, IdfTable, PlaceMatcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const BUNDLED_STOPWORDS: &str = include_str!("../resources/stopwords.txt");
const BUNDLED_IDF: &str = include_str!("../resources/idf_map.txt");

/// Errors raised by the fallible resource loaders.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read a stopword file: one stopword per line, UTF-8.
pub fn load_stopwords(path: impl AsRef<Path>) -> Result<StopwordSet, ResourceError> {
    let path = path.as_ref();
    let text = read_resource(path)?;
    Ok(StopwordSet::parse(&text))
}

/// Read a `token=value` IDF file, skipping malformed lines.
pub fn load_idf_table(path: impl AsRef<Path>) -> Result<(IdfTable, IdfParseReport), ResourceError> {
    let path = path.as_ref();
    let text = read_resource(path)?;
    Ok(IdfTable::parse(&text))
}

fn read_resource(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|source| ResourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Where to read resources from. Unset paths use the bundled copies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePaths {
    #[serde(default)]
    pub stopwords: Option<PathBuf>,
    #[serde(default)]
    pub idf: Option<PathBuf>,
}

/// Something went wrong while loading, and a default was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceWarning {
    /// The stopword file could not be read; the fallback list is in use.
    StopwordsUnavailable { path: PathBuf, reason: String },
    /// The IDF file could not be read; the table is empty.
    IdfUnavailable { path: PathBuf, reason: String },
    /// Some IDF lines did not parse and were skipped.
    MalformedIdfLines { path: PathBuf, skipped: usize },
}

impl fmt::Display for ResourceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceWarning::StopwordsUnavailable { path, reason } => write!(
                f,
                "stopwords unavailable at {} ({reason}); using fallback list",
                path.display()
            ),
            ResourceWarning::IdfUnavailable { path, reason } => write!(
                f,
                "IDF table unavailable at {} ({reason}); using empty table",
                path.display()
            ),
            ResourceWarning::MalformedIdfLines { path, skipped } => write!(
                f,
                "skipped {skipped} malformed line(s) in {}",
                path.display()
            ),
        }
    }
}

/// Immutable resources, shared by reference across matchers.
#[derive(Debug, Clone)]
pub struct ResourceStore {
    pub stopwords: Arc<StopwordSet>,
    pub idf: Arc<IdfTable>,
}

/// A store plus everything that had to fall back while building it.
#[derive(Debug, Clone)]
pub struct LoadedResources {
    pub store: ResourceStore,
    pub warnings: Vec<ResourceWarning>,
}

impl ResourceStore {
    pub fn new(stopwords: StopwordSet, idf: IdfTable) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
            idf: Arc::new(idf),
        }
    }

    /// Resources compiled into the binary.
    pub fn bundled() -> Self {
        let (idf, _) = IdfTable::parse(BUNDLED_IDF);
        Self::new(StopwordSet::parse(BUNDLED_STOPWORDS), idf)
    }

    /// Load resources from disk, degrading instead of failing.
    ///
    /// Each warning is logged as it occurs and also returned to the caller.
    pub fn load(paths: &ResourcePaths) -> LoadedResources {
        let mut warnings = Vec::new();

        let stopwords = match &paths.stopwords {
            Some(path) => match load_stopwords(path) {
                Ok(set) => set,
                Err(err) => {
                    warnings.push(ResourceWarning::StopwordsUnavailable {
                        path: path.clone(),
                        reason: source_reason(&err),
                    });
                    StopwordSet::fallback()
                }
            },
            None => StopwordSet::parse(BUNDLED_STOPWORDS),
        };

        let idf = match &paths.idf {
            Some(path) => match load_idf_table(path) {
                Ok((table, report)) => {
                    if report.skipped > 0 {
                        warnings.push(ResourceWarning::MalformedIdfLines {
                            path: path.clone(),
                            skipped: report.skipped,
                        });
                    }
                    table
                }
                Err(err) => {
                    warnings.push(ResourceWarning::IdfUnavailable {
                        path: path.clone(),
                        reason: source_reason(&err),
                    });
                    IdfTable::empty()
                }
            },
            None => IdfTable::parse(BUNDLED_IDF).0,
        };

        for warning in &warnings {
            warn!(warning = %warning, "resource_fallback");
        }
        info!(
            stopwords = stopwords.len(),
            idf_entries = idf.len(),
            warnings = warnings.len(),
            "resources_loaded"
        );

        LoadedResources {
            store: Self::new(stopwords, idf),
            warnings,
        }
    }

    /// A matcher over these resources with default capabilities and config.
    pub fn matcher(&self) -> PlaceMatcher {
        PlaceMatcher::new(Arc::clone(&self.stopwords), Arc::clone(&self.idf))
    }
}

fn source_reason(err: &ResourceError) -> String {
    match err {
        ResourceError::Read { source, .. } => source.to_string(),
    }
}
