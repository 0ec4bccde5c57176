use std::path::PathBuf;

use thiserror::Error;

use crate::coerce::CoerceError;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: column `{column}` appears more than once in the header", path.display())]
    DuplicateColumn { path: PathBuf, column: String },

    #[error("{file}: {source}")]
    Header {
        file: &'static str,
        #[source]
        source: CoerceError,
    },

    #[error("{file} line {line}: {source}")]
    Row {
        file: &'static str,
        line: u64,
        #[source]
        source: CoerceError,
    },

    #[error("{entity} {key} references missing {parent} {parent_key}")]
    MissingReference {
        entity: &'static str,
        key: String,
        parent: &'static str,
        parent_key: String,
    },

    #[error("{entity} {key} is still referenced by {child}")]
    StillReferenced {
        entity: &'static str,
        key: String,
        child: &'static str,
    },

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection pool error: {0}")]
    Pool(String),

    #[error("failed to serialize the run report: {0}")]
    Report(#[from] serde_json::Error),
}

impl SeedError {
    pub fn pool<E>(err: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Pool(err.to_string())
    }
}
