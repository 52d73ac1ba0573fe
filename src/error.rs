use crate::document::DocId;
use thiserror::Error;

/// Errors reported by the search engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Document ids must be non-negative
    #[error("document id {0} is negative")]
    NegativeDocumentId(DocId),

    /// Each document id can be added only once
    #[error("document id {0} is already in the index")]
    DuplicateDocumentId(DocId),

    /// Document words must not contain control characters
    #[error("word {0:?} contains a control character")]
    InvalidWord(String),

    /// Stop words are validated once, at construction
    #[error("stop word {0:?} contains a control character")]
    InvalidStopWord(String),

    /// A query word was empty, double-minus-prefixed, or contained a
    /// control character; the raw token is carried for diagnostics
    #[error("query word {0:?} is invalid")]
    InvalidQueryWord(String),

    #[error("document {0} is not in the index")]
    DocumentNotFound(DocId),

    #[error("document ordinal {ordinal} is out of range ({count} documents indexed)")]
    OrdinalOutOfRange { ordinal: usize, count: usize },
}

/// Result type alias for operations that may fail with [`SearchError`].
pub type Result<T> = std::result::Result<T, SearchError>;
