//! # Solr Indexer Repository
//!
//! This crate provides traits and implementations for interacting with the
//! search service. It includes definitions for errors, interfaces, the
//! adapter clients use (`SearchIndexClient`), and a concrete implementation
//! for Solr.

pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod solr;
pub mod types;

pub use client::SearchIndexClient;
pub use config::{CollectionConfig, SearchIndexConfig};
pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use solr::SolrClient;
pub use types::{DeleteOutcome, IndexSummary};
