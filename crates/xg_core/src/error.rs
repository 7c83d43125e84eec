use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the enrichment pipeline.
///
/// Per-match and per-shot problems (unmatched files, empty shot lists,
/// unresolved identities, missing coordinates) are diagnostics, not errors:
/// the affected match or feature degrades and processing continues. Only the
/// conditions below terminate a run.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no matched (shots + tracking) file pairs found")]
    NoMatchedPairs,
}

impl EnrichError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EnrichError::Io { path: path.into(), source }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        EnrichError::Parse { path: path.into(), source }
    }
}
