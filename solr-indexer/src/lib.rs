//! # Solr Indexer
//!
//! Command-line front end for administering and querying Solr collections.
//!
//! This crate provides the CLI definition, configuration, dependency
//! wiring, and one handler per subcommand.

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use config::{Dependencies, Settings};

use solr_indexer_ingest::IngestError;
use solr_indexer_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("Ingest error: {0}")]
    IngestError(#[from] IngestError),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] SearchIndexError),

    /// The collection answered the health check with a failure.
    #[error("Collection '{0}' is not healthy")]
    Unhealthy(String),
}

impl AdminError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
