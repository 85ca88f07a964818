//! Bidirectional inverted index.
//!
//! The index keeps two mappings that must always agree:
//!
//! - term → { document → term frequency } (`postings`, indexed by [`TermId`])
//! - document → { term → term frequency } (`doc_terms`)
//!
//! Every mutation goes through `&mut self`, so a reader can never observe
//! one mapping updated without the other.

use std::collections::BTreeMap;
use std::collections::btree_map::Keys;
use std::iter::Copied;

use ahash::AHashMap;

use crate::analysis::TextAnalyzer;
use crate::concurrent::{ExecutionMode, for_each_partitioned_mut};
use crate::error::{Result, SieveError};
use crate::lexical::dictionary::{TermDictionary, TermId};
use crate::lexical::document::{DocId, DocumentRecord, DocumentStatus};

/// Postings of one term: document id → term frequency.
pub type PostingList = BTreeMap<DocId, f64>;

/// Live document ids in ascending order.
pub type DocumentIds<'a> = Copied<Keys<'a, DocId, DocumentRecord>>;

#[derive(Debug, Default)]
pub struct InvertedIndex {
    dictionary: TermDictionary,
    /// Indexed by `TermId`. The list of a released id stays allocated,
    /// empty, until the id is interned again.
    postings: Vec<PostingList>,
    doc_terms: BTreeMap<DocId, BTreeMap<TermId, f64>>,
    documents: BTreeMap<DocId, DocumentRecord>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze and insert a document.
    ///
    /// Fails with [`SieveError::InvalidId`] for a negative or known id and
    /// with [`SieveError::InvalidTerm`] for a bad term; in both cases the
    /// index is left untouched.
    pub fn add_document(
        &mut self,
        doc_id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
        analyzer: &TextAnalyzer,
    ) -> Result<()> {
        if doc_id < 0 || self.documents.contains_key(&doc_id) {
            return Err(SieveError::InvalidId(doc_id));
        }
        let terms = analyzer.analyze(text)?;

        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for &term in &terms {
            *counts.entry(term).or_insert(0) += 1;
        }

        let total = terms.len() as f64;
        let mut frequencies = BTreeMap::new();
        for (term, count) in counts {
            let term_id = self.dictionary.intern(term);
            if term_id as usize == self.postings.len() {
                self.postings.push(PostingList::new());
            }
            let tf = count as f64 / total;
            self.postings[term_id as usize].insert(doc_id, tf);
            frequencies.insert(term_id, tf);
        }

        self.doc_terms.insert(doc_id, frequencies);
        self.documents
            .insert(doc_id, DocumentRecord::new(text, status, ratings));
        Ok(())
    }

    /// Remove a document and all of its postings. Returns `false` when the
    /// id is unknown.
    ///
    /// In parallel mode the document's term ids are snapshotted first and
    /// the postings are then deleted by `parts` concurrent tasks, each
    /// owning a disjoint set of posting lists. Terms no longer used by any
    /// document are released from the dictionary.
    pub fn remove_document(&mut self, doc_id: DocId, mode: ExecutionMode, parts: usize) -> bool {
        let Some(frequencies) = self.doc_terms.remove(&doc_id) else {
            return false;
        };

        let term_ids: Vec<TermId> = frequencies.into_keys().collect();
        match mode {
            ExecutionMode::Sequential => {
                for &term_id in &term_ids {
                    if let Some(list) = self.postings.get_mut(term_id as usize) {
                        list.remove(&doc_id);
                    }
                }
            }
            ExecutionMode::Parallel => {
                let mut lists = select_disjoint(&mut self.postings, &term_ids);
                for_each_partitioned_mut(&mut lists, parts, |list| {
                    list.remove(&doc_id);
                });
            }
        }
        self.release_unused_terms(&term_ids);

        self.documents.remove(&doc_id);
        true
    }

    /// Hand the ids of terms left without postings back to the dictionary.
    fn release_unused_terms(&mut self, term_ids: &[TermId]) {
        for &term_id in term_ids {
            let unused = self
                .postings
                .get(term_id as usize)
                .is_some_and(|list| list.is_empty());
            if unused {
                self.dictionary.release(term_id);
            }
        }
    }

    /// Number of live documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.documents.contains_key(&doc_id)
    }

    pub fn document(&self, doc_id: DocId) -> Option<&DocumentRecord> {
        self.documents.get(&doc_id)
    }

    pub fn document_ids(&self) -> DocumentIds<'_> {
        self.documents.keys().copied()
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    /// Non-empty posting list of `term`, if any document contains it.
    pub fn postings(&self, term: &str) -> Option<&PostingList> {
        let term_id = self.dictionary.get(term)?;
        self.postings
            .get(term_id as usize)
            .filter(|list| !list.is_empty())
    }

    /// Number of live documents containing `term`.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.postings(term).map_or(0, |list| list.len())
    }

    /// `ln(N / df)` for a non-empty posting list.
    pub fn inverse_document_frequency(&self, postings: &PostingList) -> f64 {
        (self.len() as f64 / postings.len() as f64).ln()
    }

    /// Whether `doc_id` has a posting for `term`.
    pub fn has_posting(&self, term: &str, doc_id: DocId) -> bool {
        self.postings(term)
            .is_some_and(|list| list.contains_key(&doc_id))
    }

    /// Term → frequency for one document; empty for an unknown id.
    pub fn word_frequencies(&self, doc_id: DocId) -> BTreeMap<&str, f64> {
        let Some(frequencies) = self.doc_terms.get(&doc_id) else {
            return BTreeMap::new();
        };
        frequencies
            .iter()
            .filter_map(|(&term_id, &tf)| self.dictionary.term(term_id).map(|term| (term, tf)))
            .collect()
    }

    /// Check that both mappings mirror each other exactly.
    pub fn is_consistent(&self) -> bool {
        let forward = self.postings.iter().enumerate().all(|(term_id, list)| {
            list.iter().all(|(doc_id, tf)| {
                self.doc_terms
                    .get(doc_id)
                    .and_then(|frequencies| frequencies.get(&(term_id as TermId)))
                    == Some(tf)
            })
        });
        let backward = self.doc_terms.iter().all(|(doc_id, frequencies)| {
            self.documents.contains_key(doc_id)
                && frequencies.iter().all(|(&term_id, tf)| {
                    self.postings
                        .get(term_id as usize)
                        .and_then(|list| list.get(doc_id))
                        == Some(tf)
                })
        });
        let interned = self
            .postings
            .iter()
            .enumerate()
            .filter(|(_, list)| !list.is_empty())
            .all(|(term_id, _)| self.dictionary.term(term_id as TermId).is_some());
        let live_terms = self.postings.iter().filter(|list| !list.is_empty()).count();
        forward
            && backward
            && interned
            && live_terms == self.dictionary.len()
            && self.doc_terms.len() == self.documents.len()
    }
}

/// Carve one `&mut` per id out of `slots`. `ids` must be strictly
/// ascending; ids past the end are skipped.
fn select_disjoint<'a, T>(mut slots: &'a mut [T], ids: &[TermId]) -> Vec<&'a mut T> {
    let mut selected = Vec::with_capacity(ids.len());
    let mut offset = 0;
    for &id in ids {
        let index = id as usize;
        debug_assert!(index >= offset, "ids must be strictly ascending");
        if index < offset || index - offset >= slots.len() {
            break;
        }
        let (_, tail) = std::mem::take(&mut slots).split_at_mut(index - offset);
        let Some((slot, rest)) = tail.split_first_mut() else {
            break;
        };
        selected.push(slot);
        slots = rest;
        offset = index + 1;
    }
    selected
}
