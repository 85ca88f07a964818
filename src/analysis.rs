//! Text analysis for Sieve.
//!
//! Pipeline:
//!
//! ```text
//! Text → SpaceTokenizer → term validation → stop-word removal → Terms
//! ```
//!
//! The same pipeline runs for documents at insertion time and for query
//! tokens at search time, so both sides agree on what a term is.
//!
//! # Modules
//!
//! - [`tokenizer`]: splitting on the space character and term validation
//! - [`stop_words`]: the immutable stop-word set
//! - [`analyzer`]: tokenizer + validation + stop-word removal

pub mod analyzer;
pub mod stop_words;
pub mod tokenizer;

// Re-exports
pub use analyzer::TextAnalyzer;
pub use stop_words::StopWords;
pub use tokenizer::SpaceTokenizer;
