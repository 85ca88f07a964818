//! TF-IDF ranking with a rating tie-break.
//!
//! Relevance of a document is the sum over required terms of
//! `tf(term, doc) * ln(N / df(term))`. Documents with a posting for any
//! excluded term are dropped afterwards, whatever the predicate said.
//!
//! Two strategies compute the same scores:
//!
//! - **Sequential**: one pass into an ordered map.
//! - **Parallel**: required terms are split into `partition_count` chunks
//!   whose tasks add into a [`ShardedMap`]; after the join, excluded terms
//!   are partitioned the same way and erase from it.
//!
//! Summation order differs between the two, so relevances agree only up
//! to floating-point rounding.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::concurrent::{ExecutionMode, ShardedMap, for_each_partitioned};
use crate::lexical::document::{DocId, DocumentStatus};
use crate::lexical::index::{InvertedIndex, PostingList};
use crate::lexical::query::Query;

/// Default number of hits returned by a top-N search.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
/// Relevances closer than this are considered equal.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
pub const DEFAULT_PARTITION_COUNT: usize = 10;
pub const DEFAULT_ACCUMULATOR_SHARDS: usize = 101;

/// One ranked document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.doc_id, self.relevance, self.rating
        )
    }
}

/// Tuning knobs of the ranking engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingParams {
    pub max_results: usize,
    pub relevance_epsilon: f64,
    pub partition_count: usize,
    pub accumulator_shards: usize,
}

impl Default for RankingParams {
    fn default() -> Self {
        RankingParams {
            max_results: MAX_RESULT_DOCUMENT_COUNT,
            relevance_epsilon: RELEVANCE_EPSILON,
            partition_count: DEFAULT_PARTITION_COUNT,
            accumulator_shards: DEFAULT_ACCUMULATOR_SHARDS,
        }
    }
}

/// Scores queries against a borrowed index.
#[derive(Debug, Clone, Copy)]
pub struct Ranker<'a> {
    index: &'a InvertedIndex,
    params: RankingParams,
}

impl<'a> Ranker<'a> {
    pub fn new(index: &'a InvertedIndex, params: RankingParams) -> Self {
        Ranker { index, params }
    }

    /// Every matching document with its relevance, in no particular order.
    pub fn find_all<F>(&self, query: &Query<'_>, predicate: &F, mode: ExecutionMode) -> Vec<SearchHit>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        match mode {
            ExecutionMode::Sequential => self.find_all_sequential(query, predicate),
            ExecutionMode::Parallel => self.find_all_parallel(query, predicate),
        }
    }

    /// Sorted by relevance, then rating, truncated to `max_results`.
    pub fn find_top<F>(&self, query: &Query<'_>, predicate: &F, mode: ExecutionMode) -> Vec<SearchHit>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let mut hits = self.find_all(query, predicate, mode);
        sort_hits(&mut hits, self.params.relevance_epsilon);
        hits.truncate(self.params.max_results);
        hits
    }

    fn find_all_sequential<F>(&self, query: &Query<'_>, predicate: &F) -> Vec<SearchHit>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for term in &query.required {
            let Some(postings) = self.index.postings(term) else {
                continue;
            };
            let idf = self.index.inverse_document_frequency(postings);
            for (&doc_id, &tf) in postings {
                if self.accepts(doc_id, predicate) {
                    *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }

        for term in &query.excluded {
            let Some(postings) = self.index.postings(term) else {
                continue;
            };
            for doc_id in postings.keys() {
                relevance.remove(doc_id);
            }
        }

        self.collect_hits(relevance)
    }

    fn find_all_parallel<F>(&self, query: &Query<'_>, predicate: &F) -> Vec<SearchHit>
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let parts = self.params.partition_count;
        let relevance: ShardedMap<DocId, f64> = ShardedMap::new(self.params.accumulator_shards);

        let required = self.posting_lists(query.required.iter().copied());
        for_each_partitioned(&required, parts, |postings| {
            let idf = self.index.inverse_document_frequency(postings);
            for (&doc_id, &tf) in postings.iter() {
                if self.accepts(doc_id, predicate) {
                    *relevance.access(doc_id) += tf * idf;
                }
            }
        });

        let excluded = self.posting_lists(query.excluded.iter().copied());
        for_each_partitioned(&excluded, parts, |postings| {
            for doc_id in postings.keys() {
                relevance.erase(doc_id);
            }
        });

        self.collect_hits(relevance.into_map())
    }

    fn posting_lists<'q>(&self, terms: impl Iterator<Item = &'q str>) -> Vec<&'a PostingList> {
        let index = self.index;
        terms.filter_map(|term| index.postings(term)).collect()
    }

    fn accepts<F>(&self, doc_id: DocId, predicate: &F) -> bool
    where
        F: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        self.index
            .document(doc_id)
            .is_some_and(|record| predicate(doc_id, record.status, record.rating))
    }

    fn collect_hits(&self, relevance: BTreeMap<DocId, f64>) -> Vec<SearchHit> {
        relevance
            .into_iter()
            .filter_map(|(doc_id, relevance)| {
                self.index.document(doc_id).map(|record| SearchHit {
                    doc_id,
                    relevance,
                    rating: record.rating,
                })
            })
            .collect()
    }
}

/// Order hits by relevance descending; hits whose relevances lie within
/// `epsilon` of their neighbour form a tie group ordered by rating
/// descending.
///
/// Tie groups are built by chaining neighbours after an exact sort, which
/// keeps the comparator a total order. A chain can span more than
/// `epsilon`, so a hit may end up above one that is more than `epsilon`
/// more relevant when every step between them is a near-tie.
pub fn sort_hits(hits: &mut [SearchHit], epsilon: f64) {
    hits.sort_by(|lhs, rhs| {
        rhs.relevance
            .total_cmp(&lhs.relevance)
            .then_with(|| lhs.doc_id.cmp(&rhs.doc_id))
    });

    let mut start = 0;
    while start < hits.len() {
        let mut end = start + 1;
        while end < hits.len() && hits[end - 1].relevance - hits[end].relevance < epsilon {
            end += 1;
        }
        if end - start > 1 {
            hits[start..end].sort_by(by_rating_then_relevance);
        }
        start = end;
    }
}

fn by_rating_then_relevance(lhs: &SearchHit, rhs: &SearchHit) -> Ordering {
    rhs.rating
        .cmp(&lhs.rating)
        .then_with(|| rhs.relevance.total_cmp(&lhs.relevance))
        .then_with(|| lhs.doc_id.cmp(&rhs.doc_id))
}
