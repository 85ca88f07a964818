//! Duplicate document removal.
//!
//! Two documents are duplicates when they index exactly the same set of
//! terms; frequencies and word order do not matter.

use std::collections::BTreeSet;

use ahash::AHashSet;

use crate::concurrent::ExecutionMode;
use crate::engine::SearchEngine;
use crate::lexical::document::DocId;

/// Remove every document whose term set equals the term set of a document
/// with a smaller id. Returns the removed ids in ascending order.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocId> {
    let duplicates = find_duplicates(engine);
    for &doc_id in &duplicates {
        log::info!("found duplicate document id {doc_id}");
        engine.remove_document_with(ExecutionMode::Sequential, doc_id);
    }
    duplicates
}

/// Ids that [`remove_duplicates`] would remove.
pub fn find_duplicates(engine: &SearchEngine) -> Vec<DocId> {
    let mut seen: AHashSet<BTreeSet<&str>> = AHashSet::new();
    let mut duplicates = Vec::new();
    for doc_id in engine {
        let terms: BTreeSet<&str> = engine.word_frequencies(doc_id).into_keys().collect();
        if !seen.insert(terms) {
            duplicates.push(doc_id);
        }
    }
    duplicates
}
