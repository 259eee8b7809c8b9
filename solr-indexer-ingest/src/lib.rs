//! # Solr Indexer Ingest
//!
//! This crate turns a CSV file into records and submits them to a
//! collection.
//!
//! ## Flow
//!
//! 1. **Loader**: reads the file, infers column types, and nulls blank dates
//! 2. **Dataset**: drops the excluded column from every record
//! 3. **Indexer**: sends the records as one committed batch

pub mod dataset;
pub mod errors;
pub mod indexer;
pub mod loader;

pub use dataset::Dataset;
pub use errors::IngestError;
pub use indexer::DatasetIndexer;
pub use loader::{CsvLoader, LoaderConfig};
