//! Dependency initialization and wiring for the Solr indexer.

use tracing::info;

use crate::config::Settings;
use crate::AdminError;
use solr_indexer_ingest::CsvLoader;
use solr_indexer_repository::{SearchIndexClient, SearchIndexConfig, SolrClient};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// Adapter for the target Solr service.
    pub client: SearchIndexClient,
    /// Loader for CSV input.
    pub loader: CsvLoader,
}

impl Dependencies {
    /// Initialize all dependencies from resolved settings.
    ///
    /// No request is sent here; connectivity problems surface on the first
    /// command that talks to Solr.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(AdminError)` - If the Solr client cannot be created
    pub fn new(settings: &Settings) -> Result<Self, AdminError> {
        info!(
            solr_url = %settings.solr_url,
            collection = %settings.collection,
            timeout_secs = settings.timeout.as_secs(),
            "Initializing dependencies"
        );

        let solr = SolrClient::new(&settings.solr_url, settings.timeout)
            .map_err(|e| AdminError::config(format!("Failed to create Solr client: {}", e)))?;

        let config = SearchIndexConfig {
            max_batch_size: settings.max_batch_size,
            id_field: settings.id_field.clone(),
        };

        Ok(Self::from_parts(
            SearchIndexClient::with_config(Box::new(solr), config),
            CsvLoader::new(),
        ))
    }

    /// Assemble dependencies from already-built parts.
    pub fn from_parts(client: SearchIndexClient, loader: CsvLoader) -> Self {
        Self { client, loader }
    }
}
