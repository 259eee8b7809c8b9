//! # Solr Indexer Shared
//!
//! Plain data types shared by the repository, ingest, and binary crates:
//! tabular records, field-equality queries, and search responses.

mod query;
mod record;
mod response;

pub use query::{escape_query_term, QueryClause, SearchQuery};
pub use record::{FieldValue, Record};
pub use response::{Document, FacetCount, SearchResponse};
