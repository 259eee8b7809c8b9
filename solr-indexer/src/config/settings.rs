//! Runtime settings resolved from the command line and environment.

use std::time::Duration;

use crate::cli::Cli;
use crate::AdminError;

/// Default Solr base URL.
pub const DEFAULT_SOLR_URL: &str = "http://localhost:8989/solr";

/// Default collection name.
pub const DEFAULT_COLLECTION: &str = "Hash_Subish";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub solr_url: String,
    pub collection: String,
    pub timeout: Duration,
    pub id_field: String,
    pub max_batch_size: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            solr_url: DEFAULT_SOLR_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            id_field: solr_indexer_repository::config::DEFAULT_ID_FIELD.to_string(),
            max_batch_size: None,
        }
    }
}

impl Settings {
    /// Build settings from parsed arguments and reject unusable values.
    pub fn from_cli(cli: &Cli) -> Result<Self, AdminError> {
        let settings = Self {
            solr_url: cli.solr_url.clone(),
            collection: cli.collection.clone(),
            timeout: Duration::from_secs(cli.timeout_secs),
            id_field: cli.id_field.clone(),
            max_batch_size: cli.max_batch_size,
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AdminError> {
        if self.collection.trim().is_empty() {
            return Err(AdminError::config("collection name must not be empty"));
        }
        if self.id_field.trim().is_empty() {
            return Err(AdminError::config("identifier field must not be empty"));
        }
        if self.timeout.is_zero() {
            return Err(AdminError::config("timeout must be at least one second"));
        }
        if self.max_batch_size == Some(0) {
            return Err(AdminError::config("max batch size must be at least 1"));
        }
        Ok(())
    }
}
