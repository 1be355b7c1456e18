//! Errors surfaced to the caller of the partitioning step.
//! Parsing anomalies are absorbed under the lenient policy and never show up here.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PartitionError {
    /// An input table could not be opened or read.
    #[error("can not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can not write the result: {0}")]
    Output(#[from] std::io::Error),
    #[error("requested {k} clusters, but there are only {contigs} contigs")]
    TooManyClusters { k: usize, contigs: usize },
    #[error("the number of clusters should be at least 1")]
    ZeroClusters,
    /// A numeric field could not be parsed. Only under the strict policy.
    #[error("malformed field `{field}` at row {line}, column {column}")]
    Malformed {
        line: usize,
        column: usize,
        field: String,
    },
    /// A row lacks required columns. Only under the strict policy.
    #[error("row {line} has {found} columns, {expected} required")]
    MissingColumns {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PartitionError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
