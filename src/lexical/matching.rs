//! Explains which query terms a single document matches.

use rayon::prelude::*;

use crate::concurrent::ExecutionMode;
use crate::error::{Result, SieveError};
use crate::lexical::document::{DocId, DocumentStatus};
use crate::lexical::index::InvertedIndex;
use crate::lexical::query::Query;

/// Required terms of `query` present in the document, ascending and
/// deduplicated, together with the document status.
///
/// Any excluded term present in the document empties the list.
pub fn match_document<'i>(
    index: &'i InvertedIndex,
    query: &Query<'_>,
    doc_id: DocId,
    mode: ExecutionMode,
) -> Result<(Vec<&'i str>, DocumentStatus)> {
    let status = index
        .document(doc_id)
        .map(|record| record.status)
        .ok_or(SieveError::UnknownId(doc_id))?;

    let matched = match mode {
        ExecutionMode::Sequential => {
            if query.excluded.iter().any(|term| index.has_posting(term, doc_id)) {
                return Ok((Vec::new(), status));
            }
            query
                .required
                .iter()
                .filter_map(|term| indexed_term(index, term, doc_id))
                .collect()
        }
        ExecutionMode::Parallel => {
            let excluded: Vec<&str> = query.excluded.iter().copied().collect();
            if excluded.par_iter().any(|term| index.has_posting(term, doc_id)) {
                return Ok((Vec::new(), status));
            }
            let required: Vec<&str> = query.required.iter().copied().collect();
            let mut matched: Vec<&'i str> = required
                .par_iter()
                .filter_map(|term| indexed_term(index, term, doc_id))
                .collect();
            matched.sort_unstable();
            matched.dedup();
            matched
        }
    };

    Ok((matched, status))
}

/// The index-owned copy of `term` when the document has a posting for it.
fn indexed_term<'i>(index: &'i InvertedIndex, term: &str, doc_id: DocId) -> Option<&'i str> {
    let term_id = index.dictionary().get(term)?;
    if index.has_posting(term, doc_id) {
        index.dictionary().term(term_id)
    } else {
        None
    }
}
