use crate::document::{DocId, DocumentStatus};
use crate::error::{Result, SearchError};
use std::collections::HashMap;

/// Metadata stored per indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Inverted index: word -> (document id -> term frequency), plus document
/// metadata and the ids in insertion order.
///
/// Append-only. Term frequency is occurrences / total words, so the
/// frequencies of one document sum to 1.0 unless it indexed empty.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, HashMap<DocId, f64>>,
    documents: HashMap<DocId, DocumentData>,
    document_ids: Vec<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document from its already tokenized words.
    ///
    /// The id is checked before anything is written; a rejected document
    /// leaves the index untouched. A document with no words (everything was
    /// a stop word) is accepted and gets no postings.
    pub fn add_document(
        &mut self,
        document_id: DocId,
        words: &[String],
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::NegativeDocumentId(document_id));
        }
        if self.documents.contains_key(&document_id) {
            return Err(SearchError::DuplicateDocumentId(document_id));
        }

        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *self
                    .word_to_document_freqs
                    .entry(word.clone())
                    .or_default()
                    .entry(document_id)
                    .or_insert(0.0) += inv_word_count;
            }
        }

        self.documents.insert(
            document_id,
            DocumentData {
                rating: Self::compute_average_rating(ratings),
                status,
            },
        );
        self.document_ids.push(document_id);
        Ok(())
    }

    /// Postings for a word: document id -> term frequency.
    pub fn postings(&self, word: &str) -> Option<&HashMap<DocId, f64>> {
        self.word_to_document_freqs.get(word)
    }

    /// Number of documents containing a word.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.postings(word).map_or(0, HashMap::len)
    }

    pub fn document_data(&self, document_id: DocId) -> Result<DocumentData> {
        self.documents
            .get(&document_id)
            .copied()
            .ok_or(SearchError::DocumentNotFound(document_id))
    }

    pub fn contains(&self, document_id: DocId) -> bool {
        self.documents.contains_key(&document_id)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Id of the n-th added document, for enumerating the whole index.
    pub fn document_id_at(&self, ordinal: usize) -> Result<DocId> {
        self.document_ids
            .get(ordinal)
            .copied()
            .ok_or(SearchError::OrdinalOutOfRange {
                ordinal,
                count: self.document_ids.len(),
            })
    }

    fn compute_average_rating(ratings: &[i32]) -> i32 {
        if ratings.is_empty() {
            return 0;
        }
        let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
        (sum / ratings.len() as i64) as i32
    }
}
