use crate::document::{DocId, Document, DocumentStatus};
use crate::engine::SearchEngine;
use crate::error::Result;
use std::collections::VecDeque;

/// How many recent requests the window remembers; one per minute of a day.
pub const REQUEST_WINDOW_CAPACITY: usize = 1440;

/// Sliding history of recent search requests, counting the ones that came
/// back empty.
///
/// The window is FIFO by arrival order: newest at the back, eviction from
/// the front, and only when the window is already full before the push.
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<bool>,
    no_result_count: usize,
}

impl<'a> RequestQueue<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self {
            engine,
            requests: VecDeque::with_capacity(REQUEST_WINDOW_CAPACITY),
            no_result_count: 0,
        }
    }

    /// Run a predicate-filtered search and record whether it came back
    /// empty. A failed search propagates without touching the window.
    pub fn add_find_request_with_predicate<P>(
        &mut self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let result = self
            .engine
            .find_top_documents_with_predicate(raw_query, predicate)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Status-filtered variant.
    pub fn add_find_request_with_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        let result = self
            .engine
            .find_top_documents_with_status(raw_query, status)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// ACTUAL-documents variant.
    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<Document>> {
        let result = self.engine.find_top_documents(raw_query)?;
        self.record(result.is_empty());
        Ok(result)
    }

    /// Number of requests in the window that returned no documents. O(1).
    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    fn record(&mut self, was_empty: bool) {
        // evict only when already at capacity before the push
        if self.requests.len() == REQUEST_WINDOW_CAPACITY {
            if self.requests.pop_front() == Some(true) {
                self.no_result_count -= 1;
            }
        }
        if was_empty {
            self.no_result_count += 1;
        }
        self.requests.push_back(was_empty);
    }
}
