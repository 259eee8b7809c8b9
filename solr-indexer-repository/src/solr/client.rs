//! Solr client implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! over Solr's HTTP API using `reqwest`.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::config::CollectionConfig;
use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::solr::params;
use solr_indexer_shared::{Document, FacetCount, Record, SearchQuery, SearchResponse};

/// Solr client implementation.
///
/// Every operation is one HTTP exchange against the configured base URL.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// let client = SolrClient::new("http://localhost:8989/solr", Duration::from_secs(30))?;
/// let response = client
///     .search("Hash_Subish", &SearchQuery::field("Department", "IT"))
///     .await?;
/// println!("Found {} documents", response.num_found);
/// ```
pub struct SolrClient {
    http: Client,
    base_url: Url,
}

impl SolrClient {
    /// Create a new Solr client for the given base URL.
    ///
    /// # Arguments
    ///
    /// * `url` - The Solr base URL including the context path (e.g., "http://localhost:8989/solr")
    /// * `timeout` - Per-request timeout
    ///
    /// # Returns
    ///
    /// * `Ok(SolrClient)` - A new client instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or the HTTP client cannot be built
    pub fn new(url: &str, timeout: Duration) -> Result<Self, SearchIndexError> {
        let base_url = Url::parse(url)
            .map_err(|e| SearchIndexError::connection(format!("Invalid Solr URL {}: {}", url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SearchIndexError::connection(format!(
                "Solr URL cannot be used as a base: {}",
                url
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        info!(
            url = %base_url,
            timeout_secs = timeout.as_secs(),
            "Created Solr client"
        );

        Ok(Self { http, base_url })
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded, so collection names cannot escape their
    /// path position.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, SearchIndexError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SearchIndexError::connection(format!(
                    "Solr URL cannot be used as a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and read the whole body.
    async fn execute(&self, request: RequestBuilder) -> Result<(StatusCode, String), SearchIndexError> {
        let response = request
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;
        Ok((status, body))
    }

    /// Post an update command to a collection.
    async fn post_update(
        &self,
        collection: &str,
        body: Vec<u8>,
        commit: bool,
        to_error: fn(String) -> SearchIndexError,
    ) -> Result<(), SearchIndexError> {
        let url = self.endpoint(&[collection, "update"])?;
        let request = self
            .http
            .post(url)
            .query(&params::update_params(commit))
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        let (status, body) = self.execute(request).await?;
        ensure_success(status, &body, to_error)
    }
}

/// Turn a non-success status into an error carrying Solr's message.
fn ensure_success(
    status: StatusCode,
    body: &str,
    to_error: fn(String) -> SearchIndexError,
) -> Result<(), SearchIndexError> {
    if status.is_success() {
        return Ok(());
    }

    let message = error_message(body);
    error!(status = %status, error = %message, "Solr request failed");
    Err(to_error(format!(
        "Request failed with status {}: {}",
        status, message
    )))
}

/// Extract the error message from a Solr error body.
///
/// Solr reports failures as `{"error": {"msg": "..."}}`; anything else is
/// returned as trimmed text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("msg"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

/// Parse a `/select` response body.
fn parse_search_response(body: &Value) -> Result<SearchResponse, SearchIndexError> {
    let response = body
        .get("response")
        .ok_or_else(|| SearchIndexError::parse("Search response has no 'response' section"))?;

    let num_found = response
        .get("numFound")
        .and_then(Value::as_u64)
        .ok_or_else(|| SearchIndexError::parse("Search response has no numeric 'numFound'"))?;

    let documents: Vec<Document> = response
        .get("docs")
        .and_then(Value::as_array)
        .map(|docs| docs.iter().filter_map(|d| d.as_object().cloned()).collect())
        .unwrap_or_default();

    let facet_fields = body
        .get("facet_counts")
        .and_then(|f| f.get("facet_fields"))
        .and_then(Value::as_object)
        .map(|fields| {
            fields
                .iter()
                .map(|(field, values)| (field.clone(), pair_facet_values(values)))
                .collect::<BTreeMap<_, _>>()
        });

    Ok(SearchResponse {
        num_found,
        documents,
        facet_fields,
    })
}

/// Per-node failures listed in a Collections API reply.
///
/// The Collections API can answer 200 and still carry a `failure` section.
fn creation_failure(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("failure")
        .map(Value::to_string)
}

/// A ping body is healthy only when Solr reports `status: "OK"`.
fn ping_healthy(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("status").and_then(Value::as_str).map(|s| s == "OK"))
        .unwrap_or(false)
}

/// Pair a flat `[value, count, value, count, ...]` facet list.
///
/// A trailing value without a count is dropped, as is any pair whose count
/// is not a non-negative integer.
fn pair_facet_values(values: &Value) -> Vec<FacetCount> {
    let Some(values) = values.as_array() else {
        return Vec::new();
    };

    values
        .chunks_exact(2)
        .filter_map(|pair| {
            let value = match &pair[0] {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            pair[1].as_u64().map(|count| FacetCount { value, count })
        })
        .collect()
}

#[async_trait]
impl SearchIndexProvider for SolrClient {
    #[instrument(skip(self, config), fields(num_shards = config.num_shards))]
    async fn create_collection(
        &self,
        name: &str,
        config: &CollectionConfig,
    ) -> Result<(), SearchIndexError> {
        let url = self.endpoint(&["admin", "collections"])?;
        let request = self
            .http
            .get(url)
            .query(&params::create_collection_params(name, config));

        let (status, body) = self.execute(request).await?;
        ensure_success(status, &body, SearchIndexError::CollectionCreationError)?;

        if let Some(failure) = creation_failure(&body) {
            error!(collection = %name, failure = %failure, "Collection creation reported failures");
            return Err(SearchIndexError::collection_creation(failure));
        }

        info!(collection = %name, "Collection created");
        Ok(())
    }

    #[instrument(skip(self, documents), fields(count = documents.len()))]
    async fn add_documents(
        &self,
        collection: &str,
        documents: &[Record],
    ) -> Result<(), SearchIndexError> {
        let body = serde_json::to_vec(documents)
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;

        self.post_update(collection, body, true, SearchIndexError::IndexError)
            .await?;

        debug!(collection = %collection, count = documents.len(), "Documents added and committed");
        Ok(())
    }

    #[instrument(skip(self, query), fields(q = %query.to_query_string()))]
    async fn search(
        &self,
        collection: &str,
        query: &SearchQuery,
    ) -> Result<SearchResponse, SearchIndexError> {
        let url = self.endpoint(&[collection, "select"])?;
        let request = self.http.get(url).query(&params::search_params(query));

        let (status, body) = self.execute(request).await?;
        ensure_success(status, &body, SearchIndexError::QueryError)?;

        let value: Value = serde_json::from_str(&body)
            .map_err(|e| SearchIndexError::parse(format!("Invalid search response: {}", e)))?;
        let response = parse_search_response(&value)?;

        debug!(
            num_found = response.num_found,
            returned = response.documents.len(),
            "Search completed"
        );
        Ok(response)
    }

    async fn delete_by_query(
        &self,
        collection: &str,
        query: &SearchQuery,
    ) -> Result<(), SearchIndexError> {
        let body = serde_json::to_vec(&params::delete_by_query_body(query))
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;

        self.post_update(collection, body, false, SearchIndexError::DeleteError)
            .await?;

        debug!(collection = %collection, q = %query.to_query_string(), "Delete submitted");
        Ok(())
    }

    async fn commit(&self, collection: &str) -> Result<(), SearchIndexError> {
        let body = serde_json::to_vec(&params::commit_body())
            .map_err(|e| SearchIndexError::serialization(e.to_string()))?;

        self.post_update(collection, body, false, SearchIndexError::CommitError)
            .await?;

        debug!(collection = %collection, "Committed");
        Ok(())
    }

    async fn ping(&self, collection: &str) -> Result<bool, SearchIndexError> {
        let url = self.endpoint(&[collection, "admin", "ping"])?;
        let request = self.http.get(url).query(&[("wt", "json")]);

        let (status, body) = self.execute(request).await?;
        if !status.is_success() {
            warn!(collection = %collection, status = %status, error = %error_message(&body), "Ping failed");
            return Ok(false);
        }

        let healthy = ping_healthy(&body);

        info!(collection = %collection, healthy, "Ping completed");
        Ok(healthy)
    }
}
