//! Search response types.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

/// A document as returned by the search service.
///
/// Kept as raw JSON because schemaless collections may return multi-valued
/// arrays and service-managed fields such as `id` and `_version_`.
pub type Document = Map<String, Value>;

/// One `(value, count)` pair of a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
    pub value: String,
    pub count: u64,
}

/// Result of a search request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    /// Total number of matching documents, independent of the row limit.
    pub num_found: u64,
    /// The returned page of documents.
    pub documents: Vec<Document>,
    /// Facet counts keyed by field, in the order the service returned them.
    /// `None` when the response carried no facet section at all.
    pub facet_fields: Option<BTreeMap<String, Vec<FacetCount>>>,
}

impl SearchResponse {
    /// Facet counts for one field, if the response has them.
    pub fn facet(&self, field: &str) -> Option<&[FacetCount]> {
        self.facet_fields
            .as_ref()
            .and_then(|fields| fields.get(field))
            .map(Vec::as_slice)
    }
}
