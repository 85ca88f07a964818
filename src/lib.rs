//! # Sieve
//!
//! An in-memory full-text search library ranking short documents with
//! TF-IDF.
//!
//! ## Features
//!
//! - Space tokenization with stop-word removal
//! - Required (`cat`) and excluded (`-city`) query terms
//! - TF-IDF relevance with a rating tie-break
//! - Sequential and parallel add, remove, search and match
//! - Pagination, request statistics, duplicate removal and batch queries
//!
//! ## Example
//!
//! ```
//! use sieve::{DocumentStatus, SearchEngine};
//!
//! let mut engine = SearchEngine::with_stop_words("in the").unwrap();
//! engine.add_document(1, "cat in the city", DocumentStatus::Actual, &[5]).unwrap();
//! engine.add_document(2, "dog in the park", DocumentStatus::Actual, &[3]).unwrap();
//!
//! let hits = engine.find_top_documents("cat -park").unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].doc_id, 1);
//! ```

pub mod analysis;
pub mod concurrent;
mod engine;
mod error;
pub mod lexical;
mod maintenance;
mod util;

// Re-exports for the public API
pub use analysis::{SpaceTokenizer, StopWords, TextAnalyzer};
pub use concurrent::{ExecutionMode, ShardKey, ShardedMap};
pub use engine::batch::{process_queries, process_queries_joined};
pub use engine::config::{EngineConfig, EngineConfigBuilder};
pub use engine::request_queue::RequestQueue;
pub use engine::{SearchEngine, SharedSearchEngine};
pub use error::{Result, SieveError};
pub use lexical::document::{DocId, DocumentRecord, DocumentStatus, status_filter};
pub use lexical::ranking::{MAX_RESULT_DOCUMENT_COUNT, RELEVANCE_EPSILON, SearchHit};
pub use maintenance::{find_duplicates, remove_duplicates};
pub use util::paginate::{Pages, Paginator, paginate};
pub use util::timing::ScopedTimer;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
