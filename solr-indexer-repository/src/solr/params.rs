//! Solr request parameter and body builders.
//!
//! Every request asks for a JSON response (`wt=json`) so the client can parse
//! bodies uniformly.

use serde_json::{json, Value};

use crate::config::CollectionConfig;
use solr_indexer_shared::SearchQuery;

/// Query parameters for a request.
pub type Params = Vec<(&'static str, String)>;

/// Parameters for the Collections API `CREATE` action.
pub fn create_collection_params(name: &str, config: &CollectionConfig) -> Params {
    vec![
        ("action", "CREATE".to_string()),
        ("name", name.to_string()),
        ("numShards", config.num_shards.to_string()),
        ("replicationFactor", config.replication_factor.to_string()),
        ("wt", "json".to_string()),
    ]
}

/// Parameters for a `/select` request.
///
/// `rows` is only sent when the query sets it; otherwise the service's
/// default page size applies.
pub fn search_params(query: &SearchQuery) -> Params {
    let mut params = vec![
        ("q", query.to_query_string()),
        ("wt", "json".to_string()),
    ];

    if let Some(rows) = query.rows {
        params.push(("rows", rows.to_string()));
    }

    if let Some(field) = &query.facet_field {
        params.push(("facet", "true".to_string()));
        params.push(("facet.field", field.clone()));
    }

    params
}

/// Parameters for an `/update` request.
pub fn update_params(commit: bool) -> Params {
    let mut params = vec![("wt", "json".to_string())];
    if commit {
        params.push(("commit", "true".to_string()));
    }
    params
}

/// Body of a delete-by-query update command.
pub fn delete_by_query_body(query: &SearchQuery) -> Value {
    json!({ "delete": { "query": query.to_query_string() } })
}

/// Body of an explicit commit update command.
pub fn commit_body() -> Value {
    json!({ "commit": {} })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_create_collection_params() {
        let params = create_collection_params("Hash_Subish", &CollectionConfig::default());

        assert_eq!(lookup(&params, "action"), Some("CREATE"));
        assert_eq!(lookup(&params, "name"), Some("Hash_Subish"));
        assert_eq!(lookup(&params, "numShards"), Some("1"));
        assert_eq!(lookup(&params, "replicationFactor"), Some("1"));
        assert_eq!(lookup(&params, "wt"), Some("json"));
    }

    #[test]
    fn test_search_params_default_rows() {
        let params = search_params(&SearchQuery::field("Department", "IT"));

        assert_eq!(lookup(&params, "q"), Some("Department:IT"));
        assert!(lookup(&params, "rows").is_none());
        assert!(lookup(&params, "facet").is_none());
    }

    #[test]
    fn test_count_params() {
        let params = search_params(&SearchQuery::match_all().with_rows(0));

        assert_eq!(lookup(&params, "q"), Some("*:*"));
        assert_eq!(lookup(&params, "rows"), Some("0"));
    }

    #[test]
    fn test_facet_params() {
        let params = search_params(&SearchQuery::match_all().with_rows(0).with_facet("Gender"));

        assert_eq!(lookup(&params, "facet"), Some("true"));
        assert_eq!(lookup(&params, "facet.field"), Some("Gender"));
        assert_eq!(lookup(&params, "rows"), Some("0"));
    }

    #[test]
    fn test_update_params() {
        assert_eq!(lookup(&update_params(true), "commit"), Some("true"));
        assert!(lookup(&update_params(false), "commit").is_none());
    }

    #[test]
    fn test_delete_body_is_escaped() {
        let body = delete_by_query_body(&SearchQuery::field("Employee_ID", "E-01"));
        assert_eq!(body["delete"]["query"], "Employee_ID:E\\-01");
    }

    #[test]
    fn test_commit_body() {
        assert!(commit_body()["commit"].is_object());
    }
}
