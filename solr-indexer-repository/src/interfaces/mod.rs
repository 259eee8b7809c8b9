//! Interface definitions for the search index backend.
//!
//! This module defines the abstract `SearchIndexProvider` trait that allows
//! for dependency injection and an in-memory backend in tests.

mod search_index_provider;

pub use search_index_provider::SearchIndexProvider;
