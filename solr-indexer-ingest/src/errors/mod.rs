//! Error types for the ingest crate.

use solr_indexer_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while loading or indexing a dataset.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input file could not be read.
    #[error("IO error: {0}")]
    IoError(String),

    /// The input file is not valid CSV (including rows of unequal length).
    #[error("CSV error: {0}")]
    CsvError(String),

    /// The column to exclude is not present in the data.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Error from the search index.
    #[error("Search index error: {0}")]
    SearchIndex(#[from] SearchIndexError),
}

impl IngestError {
    /// Create an IO error.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::IoError(msg.into())
    }

    /// Create a missing column error.
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn(column.into())
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::CsvError(err.to_string())
    }
}
