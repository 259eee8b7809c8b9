//! Configuration types for the SearchIndexClient.

/// Field holding the record identifier in the employee sample data.
pub const DEFAULT_ID_FIELD: &str = "Employee_ID";

/// Configuration for the SearchIndexClient.
#[derive(Debug, Clone)]
pub struct SearchIndexConfig {
    /// Maximum number of documents allowed in a single add request.
    /// `None` sends every batch as-is, whatever its size.
    pub max_batch_size: Option<usize>,
    /// Field used to look up and delete documents by identifier.
    pub id_field: String,
}

impl Default for SearchIndexConfig {
    fn default() -> Self {
        Self {
            max_batch_size: None,
            id_field: DEFAULT_ID_FIELD.to_string(),
        }
    }
}

impl SearchIndexConfig {
    /// Create a config with a custom batch size limit.
    pub fn with_max_batch_size(max_batch_size: usize) -> Self {
        Self {
            max_batch_size: Some(max_batch_size),
            ..Self::default()
        }
    }

    /// Use a different identifier field.
    pub fn id_field(mut self, id_field: impl Into<String>) -> Self {
        self.id_field = id_field.into();
        self
    }
}

/// Settings passed to the service when creating a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Number of shards the collection is split into.
    pub num_shards: u32,
    /// Number of copies kept of each shard.
    pub replication_factor: u32,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            num_shards: 1,
            replication_factor: 1,
        }
    }
}

impl CollectionConfig {
    pub fn new(num_shards: u32, replication_factor: u32) -> Self {
        Self {
            num_shards,
            replication_factor,
        }
    }
}
