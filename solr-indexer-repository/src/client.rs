//! Search index client implementation.
//!
//! This module provides the adapter application code uses to administer and
//! query collections. Each operation validates its input, delegates to the
//! injected provider, and returns a typed result.

use tracing::{info, instrument, warn};

use crate::config::{CollectionConfig, SearchIndexConfig};
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::types::{DeleteOutcome, IndexSummary};
use solr_indexer_shared::{FacetCount, Record, SearchQuery, SearchResponse};

/// The main client for interacting with the search index.
pub struct SearchIndexClient {
    provider: Box<dyn SearchIndexProvider>,
    config: SearchIndexConfig,
}

impl SearchIndexClient {
    /// Create a new SearchIndexClient with default configuration.
    pub fn new(provider: Box<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: SearchIndexConfig::default(),
        }
    }

    /// Create a new SearchIndexClient with custom configuration.
    pub fn with_config(provider: Box<dyn SearchIndexProvider>, config: SearchIndexConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &SearchIndexConfig {
        &self.config
    }

    fn validate_collection(name: &str) -> Result<(), SearchIndexError> {
        if name.trim().is_empty() {
            return Err(SearchIndexError::validation("collection name is required"));
        }
        Ok(())
    }

    /// Check if batch size exceeds the configured limit.
    fn validate_batch_size(&self, size: usize) -> Result<(), SearchIndexError> {
        if let Some(max) = self.config.max_batch_size {
            if size > max {
                return Err(SearchIndexError::batch_size_exceeded(size, max));
            }
        }
        Ok(())
    }

    /// Create a collection.
    /// Input: collection name, shard layout
    /// Output: Result<(), SearchIndexError>
    pub async fn create_collection(
        &self,
        name: &str,
        config: &CollectionConfig,
    ) -> Result<(), SearchIndexError> {
        Self::validate_collection(name)?;
        if config.num_shards == 0 || config.replication_factor == 0 {
            return Err(SearchIndexError::validation(
                "numShards and replicationFactor must be at least 1",
            ));
        }

        self.provider.create_collection(name, config).await
    }

    /// Add records to a collection in a single request with immediate commit.
    /// Input: collection name, records
    /// Output: Result<IndexSummary, SearchIndexError>
    ///
    /// The whole slice is sent as one batch. When `max_batch_size` is set, an
    /// oversize batch is rejected before any request is made.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn index(
        &self,
        collection: &str,
        records: &[Record],
    ) -> Result<IndexSummary, SearchIndexError> {
        Self::validate_collection(collection)?;

        if records.is_empty() {
            warn!(collection = %collection, "No records to index");
            return Ok(IndexSummary {
                collection: collection.to_string(),
                submitted: 0,
            });
        }

        self.validate_batch_size(records.len())?;

        self.provider.add_documents(collection, records).await?;

        info!(collection = %collection, count = records.len(), "Records indexed");
        Ok(IndexSummary {
            collection: collection.to_string(),
            submitted: records.len(),
        })
    }

    /// Find documents whose `field` equals `value`.
    /// Input: collection name, field, value, optional row limit
    /// Output: Result<SearchResponse, SearchIndexError>
    ///
    /// Without a row limit only the service's default page is returned;
    /// `num_found` still reports the full hit count.
    pub async fn search(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        rows: Option<usize>,
    ) -> Result<SearchResponse, SearchIndexError> {
        Self::validate_collection(collection)?;
        if field.is_empty() {
            return Err(SearchIndexError::validation("search field is required"));
        }
        if value.is_empty() {
            return Err(SearchIndexError::validation("search value is required"));
        }

        let mut query = SearchQuery::field(field, value);
        if let Some(rows) = rows {
            query = query.with_rows(rows);
        }

        self.provider.search(collection, &query).await
    }

    /// Total number of documents in a collection.
    pub async fn count(&self, collection: &str) -> Result<u64, SearchIndexError> {
        Self::validate_collection(collection)?;

        let query = SearchQuery::match_all().with_rows(0);
        let response = self.provider.search(collection, &query).await?;
        Ok(response.num_found)
    }

    /// Delete the documents carrying an identifier.
    /// Input: collection name, identifier value
    /// Output: Result<DeleteOutcome, SearchIndexError>
    ///
    /// Looks the identifier up first and only deletes when it exists. The
    /// lookup, delete, commit, and recount are separate requests, so a
    /// concurrent writer can make the reported outcome stale.
    #[instrument(skip(self))]
    pub async fn delete_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<DeleteOutcome, SearchIndexError> {
        Self::validate_collection(collection)?;
        if id.is_empty() {
            return Err(SearchIndexError::validation("identifier is required"));
        }

        let query = SearchQuery::field(self.config.id_field.as_str(), id).with_rows(0);

        let matched = self.provider.search(collection, &query).await?.num_found;
        if matched == 0 {
            info!(collection = %collection, id = %id, "No document with identifier");
            return Ok(DeleteOutcome::NotFound);
        }

        self.provider.delete_by_query(collection, &query).await?;
        self.provider.commit(collection).await?;

        let remaining = self.provider.search(collection, &query).await?.num_found;
        info!(collection = %collection, id = %id, matched, remaining, "Deleted by identifier");

        Ok(DeleteOutcome::Deleted { matched, remaining })
    }

    /// Facet counts for one field across the whole collection.
    /// Input: collection name, facet field
    /// Output: Result<Option<Vec<FacetCount>>, SearchIndexError>
    ///
    /// Pairs are returned in the order the service produced them. `None`
    /// means the response carried no facet counts for the field.
    pub async fn facet_counts(
        &self,
        collection: &str,
        field: &str,
    ) -> Result<Option<Vec<FacetCount>>, SearchIndexError> {
        Self::validate_collection(collection)?;
        if field.is_empty() {
            return Err(SearchIndexError::validation("facet field is required"));
        }

        let query = SearchQuery::match_all().with_rows(0).with_facet(field);
        let response = self.provider.search(collection, &query).await?;

        Ok(response.facet(field).map(<[FacetCount]>::to_vec))
    }

    /// Check that a collection answers requests.
    pub async fn health_check(&self, collection: &str) -> Result<bool, SearchIndexError> {
        Self::validate_collection(collection)?;
        self.provider.ping(collection).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use solr_indexer_shared::{FieldValue, QueryClause};
    use std::collections::{BTreeMap, HashMap};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    const DEFAULT_ROWS: usize = 10;

    #[derive(Default)]
    struct MockState {
        collections: HashMap<String, Vec<Record>>,
        pending_deletes: Vec<(String, SearchQuery)>,
        delete_calls: usize,
        commits: usize,
    }

    /// In-memory provider that mimics the service semantics the client relies on.
    #[derive(Clone, Default)]
    struct MockProvider {
        state: Arc<Mutex<MockState>>,
        omit_facets: bool,
    }

    impl MockProvider {
        fn with_collection(name: &str) -> Self {
            let provider = Self::default();
            provider
                .state
                .try_lock()
                .unwrap()
                .collections
                .insert(name.to_string(), Vec::new());
            provider
        }
    }

    fn matches(record: &Record, query: &SearchQuery) -> bool {
        match &query.clause {
            QueryClause::MatchAll => true,
            QueryClause::FieldEquals { field, value } => record
                .get(field)
                .map(|v| !v.is_null() && v.to_string() == *value)
                .unwrap_or(false),
        }
    }

    #[async_trait]
    impl SearchIndexProvider for MockProvider {
        async fn create_collection(
            &self,
            name: &str,
            _config: &CollectionConfig,
        ) -> Result<(), SearchIndexError> {
            let mut state = self.state.lock().await;
            if state.collections.contains_key(name) {
                return Err(SearchIndexError::collection_creation(format!(
                    "collection already exists: {}",
                    name
                )));
            }
            state.collections.insert(name.to_string(), Vec::new());
            Ok(())
        }

        async fn add_documents(
            &self,
            collection: &str,
            documents: &[Record],
        ) -> Result<(), SearchIndexError> {
            let mut state = self.state.lock().await;
            let docs = state
                .collections
                .get_mut(collection)
                .ok_or_else(|| SearchIndexError::index("no such collection"))?;
            docs.extend_from_slice(documents);
            Ok(())
        }

        async fn search(
            &self,
            collection: &str,
            query: &SearchQuery,
        ) -> Result<SearchResponse, SearchIndexError> {
            let state = self.state.lock().await;
            let docs = state
                .collections
                .get(collection)
                .ok_or_else(|| SearchIndexError::query("no such collection"))?;

            let hits: Vec<&Record> = docs.iter().filter(|r| matches(r, query)).collect();
            let documents = hits
                .iter()
                .take(query.rows.unwrap_or(DEFAULT_ROWS))
                .map(|r| match serde_json::to_value(r).unwrap() {
                    serde_json::Value::Object(map) => map,
                    _ => unreachable!(),
                })
                .collect();

            let facet_fields = match (&query.facet_field, self.omit_facets) {
                (Some(field), false) => {
                    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
                    for value in hits.iter().filter_map(|r| r.get(field)) {
                        if !value.is_null() {
                            *counts.entry(value.to_string()).or_default() += 1;
                        }
                    }
                    let mut pairs: Vec<FacetCount> = counts
                        .into_iter()
                        .map(|(value, count)| FacetCount { value, count })
                        .collect();
                    pairs.sort_by(|a, b| b.count.cmp(&a.count));
                    Some(BTreeMap::from([(field.clone(), pairs)]))
                }
                _ => None,
            };

            Ok(SearchResponse {
                num_found: hits.len() as u64,
                documents,
                facet_fields,
            })
        }

        async fn delete_by_query(
            &self,
            collection: &str,
            query: &SearchQuery,
        ) -> Result<(), SearchIndexError> {
            let mut state = self.state.lock().await;
            state.delete_calls += 1;
            state
                .pending_deletes
                .push((collection.to_string(), query.clone()));
            Ok(())
        }

        async fn commit(&self, _collection: &str) -> Result<(), SearchIndexError> {
            let mut state = self.state.lock().await;
            state.commits += 1;
            let pending: Vec<_> = state.pending_deletes.drain(..).collect();
            for (collection, query) in pending {
                if let Some(docs) = state.collections.get_mut(&collection) {
                    docs.retain(|r| !matches(r, &query));
                }
            }
            Ok(())
        }

        async fn ping(&self, collection: &str) -> Result<bool, SearchIndexError> {
            Ok(self.state.lock().await.collections.contains_key(collection))
        }
    }

    fn employee(id: &str, department: &str, gender: &str) -> Record {
        Record::new()
            .with("Employee_ID", id)
            .with("Department", department)
            .with("Gender", gender)
            .with("Hire Date", FieldValue::Null)
    }

    fn employees() -> Vec<Record> {
        vec![
            employee("E001", "IT", "Male"),
            employee("E002", "IT", "Female"),
            employee("E003", "Finance", "Female"),
            employee("E004", "HR", "Male"),
            employee("E005", "IT", "Female"),
        ]
    }

    #[tokio::test]
    async fn test_create_collection() {
        let client = SearchIndexClient::new(Box::new(MockProvider::default()));

        client
            .create_collection("Hash_Subish", &CollectionConfig::default())
            .await
            .unwrap();
        assert!(client.health_check("Hash_Subish").await.unwrap());

        let duplicate = client
            .create_collection("Hash_Subish", &CollectionConfig::default())
            .await;
        assert!(matches!(
            duplicate,
            Err(SearchIndexError::CollectionCreationError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_collection_validation() {
        let client = SearchIndexClient::new(Box::new(MockProvider::default()));

        assert!(client
            .create_collection("  ", &CollectionConfig::default())
            .await
            .is_err());
        assert!(client
            .create_collection("c", &CollectionConfig::new(0, 1))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_index_then_count_increases_by_batch_size() {
        let client = SearchIndexClient::new(Box::new(MockProvider::with_collection("c")));

        let before = client.count("c").await.unwrap();
        let summary = client.index("c", &employees()).await.unwrap();
        let after = client.count("c").await.unwrap();

        assert_eq!(summary.submitted, 5);
        assert_eq!(summary.collection, "c");
        assert_eq!(after - before, 5);
    }

    #[tokio::test]
    async fn test_index_empty_sends_nothing() {
        let client = SearchIndexClient::new(Box::new(MockProvider::default()));

        // The collection does not exist, so a request would fail.
        let summary = client.index("missing", &[]).await.unwrap();
        assert_eq!(summary.submitted, 0);
    }

    #[tokio::test]
    async fn test_index_batch_size_exceeded() {
        let provider = MockProvider::with_collection("c");
        let client = SearchIndexClient::with_config(
            Box::new(provider.clone()),
            SearchIndexConfig::with_max_batch_size(2),
        );

        let result = client.index("c", &employees()).await;

        assert!(matches!(
            result,
            Err(SearchIndexError::BatchSizeExceeded {
                provided: 5,
                max: 2
            })
        ));
        assert_eq!(client.count("c").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_search_by_field() {
        let client = SearchIndexClient::new(Box::new(MockProvider::with_collection("c")));
        client.index("c", &employees()).await.unwrap();

        let response = client.search("c", "Department", "IT", None).await.unwrap();

        assert_eq!(response.num_found, 3);
        assert_eq!(response.documents.len(), 3);
        assert!(response
            .documents
            .iter()
            .all(|d| d["Department"] == "IT"));
    }

    #[tokio::test]
    async fn test_search_returns_default_page_only() {
        let client = SearchIndexClient::new(Box::new(MockProvider::with_collection("c")));
        let records: Vec<Record> = (0..15)
            .map(|i| employee(&format!("E{:03}", i), "IT", "Male"))
            .collect();
        client.index("c", &records).await.unwrap();

        let response = client.search("c", "Department", "IT", None).await.unwrap();
        assert_eq!(response.num_found, 15);
        assert_eq!(response.documents.len(), DEFAULT_ROWS);

        let response = client.search("c", "Department", "IT", Some(15)).await.unwrap();
        assert_eq!(response.documents.len(), 15);
    }

    #[tokio::test]
    async fn test_search_validation() {
        let client = SearchIndexClient::new(Box::new(MockProvider::with_collection("c")));

        assert!(client.search("c", "", "IT", None).await.is_err());
        assert!(client.search("c", "Department", "", None).await.is_err());
        assert!(client.search("", "Department", "IT", None).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_existing_id() {
        let provider = MockProvider::with_collection("c");
        let client = SearchIndexClient::new(Box::new(provider.clone()));
        client.index("c", &employees()).await.unwrap();

        let outcome = client.delete_by_id("c", "E003").await.unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                matched: 1,
                remaining: 0
            }
        );
        assert_eq!(client.count("c").await.unwrap(), 4);
        let response = client.search("c", "Employee_ID", "E003", None).await.unwrap();
        assert_eq!(response.num_found, 0);
        assert_eq!(provider.state.lock().await.commits, 1);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let provider = MockProvider::with_collection("c");
        let client = SearchIndexClient::new(Box::new(provider.clone()));
        client.index("c", &employees()).await.unwrap();

        let outcome = client.delete_by_id("c", "E999").await.unwrap();

        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(client.count("c").await.unwrap(), 5);
        let state = provider.state.lock().await;
        assert_eq!(state.delete_calls, 0);
        assert_eq!(state.commits, 0);
    }

    #[tokio::test]
    async fn test_delete_uses_configured_id_field() {
        let client = SearchIndexClient::with_config(
            Box::new(MockProvider::with_collection("c")),
            SearchIndexConfig::default().id_field("Gender"),
        );
        client.index("c", &employees()).await.unwrap();

        let outcome = client.delete_by_id("c", "Male").await.unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Deleted {
                matched: 2,
                remaining: 0
            }
        );
        assert_eq!(client.count("c").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_facet_counts_sum_to_total() {
        let client = SearchIndexClient::new(Box::new(MockProvider::with_collection("c")));
        client.index("c", &employees()).await.unwrap();

        let facets = client.facet_counts("c", "Department").await.unwrap().unwrap();
        let total = client.count("c").await.unwrap();

        assert_eq!(facets[0].value, "IT");
        assert_eq!(facets[0].count, 3);
        assert_eq!(facets.iter().map(|f| f.count).sum::<u64>(), total);
    }

    #[tokio::test]
    async fn test_facet_counts_absent() {
        let provider = MockProvider {
            omit_facets: true,
            ..MockProvider::with_collection("c")
        };
        let client = SearchIndexClient::new(Box::new(provider));
        client.index("c", &employees()).await.unwrap();

        assert!(client.facet_counts("c", "Department").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_health_check_missing_collection() {
        let client = SearchIndexClient::new(Box::new(MockProvider::default()));
        assert!(!client.health_check("nope").await.unwrap());
    }
}
