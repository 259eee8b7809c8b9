//! Field-equality query builder.
//!
//! Queries are rendered to the Lucene standard query syntax. Field names and
//! values are escaped so that reserved characters are matched literally
//! instead of changing the meaning of the query.

/// Characters with special meaning in the Lucene query syntax.
const RESERVED_CHARS: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&',
    ';', '/',
];

/// Escape a field name or value for use in a query string.
///
/// Every reserved character and every whitespace character is prefixed
/// with a backslash.
pub fn escape_query_term(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if RESERVED_CHARS.contains(&c) || c.is_whitespace() {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// The matching part of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryClause {
    /// Matches every document (`*:*`).
    MatchAll,
    /// Matches documents whose `field` equals `value`.
    FieldEquals { field: String, value: String },
}

/// A search request against a single collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// What to match.
    pub clause: QueryClause,
    /// Maximum number of documents to return. `None` leaves the service default.
    pub rows: Option<usize>,
    /// Field to compute facet counts for.
    pub facet_field: Option<String>,
}

impl SearchQuery {
    /// A query matching every document.
    pub fn match_all() -> Self {
        Self {
            clause: QueryClause::MatchAll,
            rows: None,
            facet_field: None,
        }
    }

    /// A query matching documents where `field` equals `value`.
    pub fn field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            clause: QueryClause::FieldEquals {
                field: field.into(),
                value: value.into(),
            },
            rows: None,
            facet_field: None,
        }
    }

    /// Limit the number of returned documents.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Request facet counts for `field`.
    pub fn with_facet(mut self, field: impl Into<String>) -> Self {
        self.facet_field = Some(field.into());
        self
    }

    /// Render the clause as a query string.
    pub fn to_query_string(&self) -> String {
        match &self.clause {
            QueryClause::MatchAll => "*:*".to_string(),
            QueryClause::FieldEquals { field, value } => {
                format!("{}:{}", escape_query_term(field), escape_query_term(value))
            }
        }
    }
}
