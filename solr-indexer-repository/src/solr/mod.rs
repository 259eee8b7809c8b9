//! Solr implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! on top of Solr's HTTP API.

mod client;
mod params;

pub use client::SolrClient;
