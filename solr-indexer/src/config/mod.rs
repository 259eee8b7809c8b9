//! Configuration and dependency wiring.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::{Settings, DEFAULT_COLLECTION, DEFAULT_SOLR_URL, DEFAULT_TIMEOUT_SECS};
