// Re-export main components
pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;
pub mod ranking;
pub mod request;
pub mod tokenizer;

// Re-export commonly used types
pub use document::{DocId, Document, DocumentStatus};
pub use engine::{MatchResult, SearchEngine};
pub use index::InvertedIndex;
pub use query::ParsedQuery;
pub use ranking::{MAX_RESULT_COUNT, RELEVANCE_EPSILON};
pub use request::{RequestQueue, REQUEST_WINDOW_CAPACITY};
pub use tokenizer::Tokenizer;

// Re-export error types
pub use error::{Result, SearchError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_workflow() -> Result<()> {
        let mut engine = SearchEngine::from_stop_words_text("and in at")?;

        engine.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7])?;
        engine.add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3])?;
        engine.add_document(3, "big cat fancy collar", DocumentStatus::Actual, &[1, 2, 8])?;

        let found = engine.find_top_documents("curly -dog")?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);

        let mut queue = RequestQueue::new(&engine);
        queue.add_find_request("nothing matches this")?;
        queue.add_find_request("fancy collar")?;
        assert_eq!(queue.no_result_requests(), 1);

        Ok(())
    }
}
