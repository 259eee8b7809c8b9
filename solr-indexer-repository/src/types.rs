//! Result types for search index operations.

/// Outcome of adding a batch of records to a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    /// Collection the records were added to.
    pub collection: String,
    /// Number of records submitted and committed.
    pub submitted: usize,
}

/// Outcome of a delete-by-identifier request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No document carried the identifier; nothing was deleted.
    NotFound,
    /// Matching documents were deleted and the deletion committed.
    Deleted {
        /// Documents matching the identifier before the delete.
        matched: u64,
        /// Documents still matching the identifier after the commit.
        remaining: u64,
    },
}
