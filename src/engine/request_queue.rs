//! Sliding-window statistics over the searches of one engine.

use std::collections::VecDeque;

use crate::engine::SearchEngine;
use crate::error::{Result, SieveError};
use crate::lexical::document::{DocId, DocumentStatus};
use crate::lexical::ranking::SearchHit;

#[derive(Debug, Clone, Copy)]
struct RequestRecord {
    hit_count: usize,
}

impl RequestRecord {
    fn is_empty(&self) -> bool {
        self.hit_count == 0
    }
}

/// Runs searches and remembers, for the last `window` of them, how many
/// returned nothing.
#[derive(Debug)]
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    window: usize,
    requests: VecDeque<RequestRecord>,
    no_result_requests: usize,
}

impl<'a> RequestQueue<'a> {
    /// Queue with the engine's configured window.
    pub fn new(engine: &'a SearchEngine) -> Self {
        let window = engine.config().request_window;
        RequestQueue {
            engine,
            window,
            requests: VecDeque::with_capacity(window),
            no_result_requests: 0,
        }
    }

    pub fn with_window(engine: &'a SearchEngine, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(SieveError::invalid_argument("request window must be positive"));
        }
        Ok(RequestQueue {
            engine,
            window,
            requests: VecDeque::with_capacity(window),
            no_result_requests: 0,
        })
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<SearchHit>> {
        let hits = self.engine.find_top_documents(raw_query)?;
        self.record(&hits);
        Ok(hits)
    }

    pub fn add_find_request_by_status(
        &mut self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        let hits = self.engine.find_top_documents_by_status(raw_query, status)?;
        self.record(&hits);
        Ok(hits)
    }

    pub fn add_find_request_by<F>(&mut self, raw_query: &str, predicate: F) -> Result<Vec<SearchHit>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let hits = self.engine.find_top_documents_by(raw_query, predicate)?;
        self.record(&hits);
        Ok(hits)
    }

    /// Empty results among the remembered requests.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_requests
    }

    /// Number of remembered requests, at most the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    fn record(&mut self, hits: &[SearchHit]) {
        if self.requests.len() == self.window {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.is_empty() {
                    self.no_result_requests -= 1;
                }
            }
        }
        let record = RequestRecord {
            hit_count: hits.len(),
        };
        if record.is_empty() {
            self.no_result_requests += 1;
        }
        self.requests.push_back(record);
    }
}
