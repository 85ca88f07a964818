//! Lexical search: the inverted index, query parsing and TF-IDF ranking.
//!
//! # Module Structure
//!
//! - `document`: document records, status and rating
//! - `dictionary`: engine-wide term interning
//! - `index`: the bidirectional inverted index
//! - `query`: parsed queries and the query parser
//! - `ranking`: TF-IDF scoring, tie-break sorting and truncation
//! - `matching`: term-overlap explanation for a single document

pub mod dictionary;
pub mod document;
pub mod index;
pub mod matching;
pub mod query;
pub mod ranking;

// Re-exports
pub use dictionary::{TermDictionary, TermId};
pub use document::{DocId, DocumentRecord, DocumentStatus, compute_average_rating, status_filter};
pub use index::{InvertedIndex, PostingList};
pub use query::{Query, QueryParser};
pub use ranking::{Ranker, RankingParams, SearchHit};
