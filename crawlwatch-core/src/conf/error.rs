use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read catalog file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid catalog file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("catalog {path} declares no signatures")]
    EmptyCatalog { path: PathBuf },

    #[error("catalog {path}: signature #{index} is empty and would match every request")]
    EmptySignature { path: PathBuf, index: usize },

    //-------------------------------------------------------------------------
    // Embedded templates
    //-------------------------------------------------------------------------
    #[error("missing embedded catalog template: {name}")]
    MissingTemplate { name: String },

    #[error("embedded catalog template {name} is not valid UTF-8")]
    InvalidTemplate { name: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
