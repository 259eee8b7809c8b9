//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations.
//! The production implementation talks to Solr over HTTP; tests plug in an
//! in-memory provider.

use async_trait::async_trait;

use crate::config::CollectionConfig;
use crate::errors::SearchIndexError;
use solr_indexer_shared::{Record, SearchQuery, SearchResponse};

/// Abstracts the underlying search service.
///
/// Implementations are injected into `SearchIndexClient`. Every method is a
/// single request/response exchange and returns a typed error on any
/// transport failure or non-success response.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Create a collection with the given shard layout.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the service created the collection
    /// * `Err(SearchIndexError::CollectionCreationError)` - If the service refused
    async fn create_collection(
        &self,
        name: &str,
        config: &CollectionConfig,
    ) -> Result<(), SearchIndexError>;

    /// Add all documents in one request and commit before returning.
    ///
    /// Once this returns `Ok`, every document is visible to searches.
    async fn add_documents(
        &self,
        collection: &str,
        documents: &[Record],
    ) -> Result<(), SearchIndexError>;

    /// Run a query and return the hit count, the documents, and any facets.
    async fn search(
        &self,
        collection: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchIndexError>;

    /// Delete every document matching the query. Not committed.
    async fn delete_by_query(
        &self,
        collection: &str,
        query: &SearchQuery,
    ) -> Result<(), SearchIndexError>;

    /// Make pending changes visible to searches.
    async fn commit(&self, collection: &str) -> Result<(), SearchIndexError>;

    /// Check that the collection answers requests.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the collection is healthy
    /// * `Ok(false)` - If the service answered but reported a problem
    /// * `Err(SearchIndexError)` - If the check could not be executed
    async fn ping(&self, collection: &str) -> Result<bool, SearchIndexError>;
}
