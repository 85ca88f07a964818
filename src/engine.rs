pub mod batch;
pub mod config;
pub mod request_queue;

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::analysis::{StopWords, TextAnalyzer};
use crate::concurrent::ExecutionMode;
use crate::error::Result;
use crate::lexical::document::{DocId, DocumentRecord, DocumentStatus, status_filter};
use crate::lexical::index::{DocumentIds, InvertedIndex};
use crate::lexical::matching;
use crate::lexical::query::QueryParser;
use crate::lexical::ranking::{Ranker, SearchHit};
use crate::util::timing::ScopedTimer;

use self::config::EngineConfig;

/// Engine shared between threads: searches take the read lock, add and
/// remove take the write lock.
pub type SharedSearchEngine = Arc<RwLock<SearchEngine>>;

/// In-memory TF-IDF search engine.
///
/// The engine owns the documents, the inverted index and the stop words.
/// Mutations take `&mut self` and searches take `&self`, so a search never
/// observes a half-applied add or remove.
#[derive(Debug)]
pub struct SearchEngine {
    config: EngineConfig,
    analyzer: Arc<TextAnalyzer>,
    parser: QueryParser,
    index: InvertedIndex,
}

impl SearchEngine {
    /// Create an engine from a validated configuration.
    ///
    /// Fails with `InvalidConfig` for unusable settings and with
    /// `InvalidTerm` when a stop word contains a control character.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let stop_words = StopWords::from_words(&config.stop_words)?;
        let analyzer = Arc::new(TextAnalyzer::new(stop_words));
        let parser = QueryParser::new(Arc::clone(&analyzer));

        log::debug!(
            "search engine created with {} stop words, default mode {:?}",
            analyzer.stop_words().len(),
            config.default_mode
        );

        Ok(SearchEngine {
            config,
            analyzer,
            parser,
            index: InvertedIndex::new(),
        })
    }

    /// Engine with default settings and space-separated stop words.
    pub fn with_stop_words(text: &str) -> Result<Self> {
        Self::new(EngineConfig::builder().stop_words_text(text).build())
    }

    /// Engine with default settings and the given stop words.
    pub fn from_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(EngineConfig::builder().stop_words(words).build())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        self.analyzer.stop_words()
    }

    /// Index a document.
    ///
    /// `InvalidId` for a negative or already used id, `InvalidTerm` for a
    /// term with a control character. A failed add changes nothing.
    pub fn add_document(
        &mut self,
        doc_id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        self.index
            .add_document(doc_id, text, status, ratings, &self.analyzer)?;
        log::debug!("added document {doc_id} ({status:?})");
        Ok(())
    }

    /// Remove a document in the configured default mode.
    pub fn remove_document(&mut self, doc_id: DocId) -> bool {
        self.remove_document_with(self.config.default_mode, doc_id)
    }

    /// Remove a document; `false` when the id is unknown.
    pub fn remove_document_with(&mut self, mode: ExecutionMode, doc_id: DocId) -> bool {
        let removed = self
            .index
            .remove_document(doc_id, mode, self.config.partition_count);
        if removed {
            log::debug!("removed document {doc_id} ({mode:?})");
        }
        removed
    }

    /// Top hits among [`DocumentStatus::Actual`] documents.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<SearchHit>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<SearchHit>> {
        self.find_top_documents_by(raw_query, status_filter(status))
    }

    pub fn find_top_documents_by<F>(&self, raw_query: &str, predicate: F) -> Result<Vec<SearchHit>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_documents_with(self.config.default_mode, raw_query, predicate)
    }

    /// Parse `raw_query`, score every accepted document, then sort by
    /// relevance (rating on near-ties) and keep the best `max_results`.
    pub fn find_top_documents_with<F>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<SearchHit>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let _timer = ScopedTimer::new("find_top_documents");
        let query = self.parser.parse(raw_query)?;
        let hits = self.ranker().find_top(&query, &predicate, mode);
        log::debug!("query {raw_query:?} ({mode:?}) returned {} hits", hits.len());
        Ok(hits)
    }

    /// Every accepted document with its relevance, unsorted and untruncated.
    pub fn find_all_documents_with<F>(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        predicate: F,
    ) -> Result<Vec<SearchHit>>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = self.parser.parse(raw_query)?;
        Ok(self.ranker().find_all(&query, &predicate, mode))
    }

    pub fn match_document(
        &self,
        raw_query: &str,
        doc_id: DocId,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        self.match_document_with(self.config.default_mode, raw_query, doc_id)
    }

    /// Query terms found in one document, or nothing when the document
    /// contains an excluded term. `UnknownId` for a missing document.
    pub fn match_document_with(
        &self,
        mode: ExecutionMode,
        raw_query: &str,
        doc_id: DocId,
    ) -> Result<(Vec<&str>, DocumentStatus)> {
        let query = self.parser.parse(raw_query)?;
        matching::match_document(&self.index, &query, doc_id, mode)
    }

    /// Term → frequency of one document; empty for an unknown id.
    pub fn word_frequencies(&self, doc_id: DocId) -> BTreeMap<&str, f64> {
        self.index.word_frequencies(doc_id)
    }

    pub fn document_count(&self) -> usize {
        self.index.len()
    }

    /// Live ids in ascending order.
    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.index.document_ids()
    }

    pub fn document(&self, doc_id: DocId) -> Option<&DocumentRecord> {
        self.index.document(doc_id)
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn into_shared(self) -> SharedSearchEngine {
        Arc::new(RwLock::new(self))
    }

    fn ranker(&self) -> Ranker<'_> {
        Ranker::new(&self.index, self.config.ranking_params())
    }
}

impl<'a> IntoIterator for &'a SearchEngine {
    type Item = DocId;
    type IntoIter = DocumentIds<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.document_ids()
    }
}
