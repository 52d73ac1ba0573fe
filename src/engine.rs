use crate::document::{DocId, Document, DocumentStatus};
use crate::error::Result;
use crate::index::{DocumentData, InvertedIndex};
use crate::query::{parse_query, ParsedQuery};
use crate::ranking::{find_all_documents, select_top_documents};
use crate::tokenizer::Tokenizer;
use serde::Serialize;

/// Match report for one document against one query: the required words the
/// document actually contains, plus its status.
///
/// An empty word list on a document that holds an excluded query word is how
/// exclusion is signaled; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

/// The search façade: tokenizer + inverted index behind one API.
///
/// Append-only and single-threaded; callers sharing an engine across
/// threads must serialize access themselves.
#[derive(Default)]
pub struct SearchEngine {
    tokenizer: Tokenizer,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Create an engine with the given stop words.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            tokenizer: Tokenizer::new(stop_words)?,
            index: InvertedIndex::new(),
        })
    }

    /// Create an engine from a space-delimited stop-word string.
    pub fn from_stop_words_text(stop_words_text: &str) -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::from_text(stop_words_text)?,
            index: InvertedIndex::new(),
        })
    }

    /// Tokenize and index a document. Fails without touching the index when
    /// the id is negative or taken, or when any word is invalid.
    pub fn add_document(
        &mut self,
        document_id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let words = self.tokenizer.split_into_words_no_stop(text)?;
        self.index.add_document(document_id, &words, status, ratings)?;
        tracing::debug!(document_id, word_count = words.len(), "indexed document");
        Ok(())
    }

    /// Top documents for a query, filtered by an arbitrary predicate over
    /// (id, status, rating).
    pub fn find_top_documents_with_predicate<P>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let query = self.parse(raw_query)?;
        let matched = find_all_documents(&self.index, &query, predicate);
        tracing::debug!(raw_query, matched = matched.len(), "query executed");
        Ok(select_top_documents(matched))
    }

    /// Top documents restricted to one status.
    pub fn find_top_documents_with_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with_predicate(raw_query, |_, document_status, _| {
            document_status == status
        })
    }

    /// Top ACTUAL documents.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Id of the n-th added document.
    pub fn document_id_at(&self, ordinal: usize) -> Result<DocId> {
        self.index.document_id_at(ordinal)
    }

    pub fn document_data(&self, document_id: DocId) -> Result<DocumentData> {
        self.index.document_data(document_id)
    }

    /// Which required words of the query the document contains, sorted.
    /// A single excluded word in the document clears the whole list.
    pub fn match_document(&self, raw_query: &str, document_id: DocId) -> Result<MatchResult> {
        let query = self.parse(raw_query)?;
        let data = self.index.document_data(document_id)?;

        let mut words = Vec::new();
        for word in &query.plus_words {
            if let Some(postings) = self.index.postings(word) {
                if postings.contains_key(&document_id) {
                    words.push(word.clone());
                }
            }
        }
        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                if postings.contains_key(&document_id) {
                    words.clear();
                    break;
                }
            }
        }
        words.sort();
        Ok(MatchResult {
            words,
            status: data.status,
        })
    }

    fn parse(&self, raw_query: &str) -> Result<ParsedQuery> {
        parse_query(raw_query, &self.tokenizer)
    }
}
