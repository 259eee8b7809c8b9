//! Indexer module for the ingest crate.
//!
//! Submits a loaded dataset to a collection.

use tracing::{info, instrument};

use crate::dataset::Dataset;
use crate::errors::IngestError;
use solr_indexer_repository::{IndexSummary, SearchIndexClient};

/// Sends datasets to the search index through a [`SearchIndexClient`].
pub struct DatasetIndexer<'a> {
    client: &'a SearchIndexClient,
}

impl<'a> DatasetIndexer<'a> {
    pub fn new(client: &'a SearchIndexClient) -> Self {
        Self { client }
    }

    /// Drop `exclude_column` from every record, then add all records in one
    /// committed request.
    ///
    /// The column check happens before any request, so a missing column
    /// leaves the collection untouched.
    #[instrument(skip(self, dataset), fields(rows = dataset.len()))]
    pub async fn index(
        &self,
        collection: &str,
        dataset: Dataset,
        exclude_column: &str,
    ) -> Result<IndexSummary, IngestError> {
        let dataset = dataset.exclude_column(exclude_column)?;
        let summary = self.client.index(collection, dataset.records()).await?;

        info!(
            collection = %summary.collection,
            submitted = summary.submitted,
            excluded = %exclude_column,
            "Dataset indexed"
        );
        Ok(summary)
    }
}
