use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors of a run. Bad lines and bad timestamps never end up here.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no log files match '{pattern}'")]
    NoInput { pattern: String },

    #[error("analysis cancelled")]
    Cancelled,
}

impl AnalyzeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(origin: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            origin: origin.into(),
            source,
        }
    }
}
