//! Many queries against one engine at once.

use rayon::prelude::*;

use crate::engine::SearchEngine;
use crate::error::Result;
use crate::lexical::ranking::SearchHit;

/// Run every query in parallel; each result list is in query order.
///
/// Each query is ranked sequentially. The first failing query (in query
/// order) aborts the batch with its error.
pub fn process_queries<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<Vec<SearchHit>>>
where
    S: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|query| engine.find_top_documents(query.as_ref()))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// [`process_queries`] flattened: all hits of the first query, then the
/// second, and so on.
pub fn process_queries_joined<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<SearchHit>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}
