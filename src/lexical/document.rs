//! Document records stored by the index.

use serde::{Deserialize, Serialize};

/// Caller-assigned document identifier. Must be non-negative.
pub type DocId = i64;

/// Lifecycle status attached to every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Stored document: original text, averaged rating and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub rating: i32,
    pub status: DocumentStatus,
    pub text: String,
}

impl DocumentRecord {
    pub fn new(text: impl Into<String>, status: DocumentStatus, ratings: &[i32]) -> Self {
        DocumentRecord {
            rating: compute_average_rating(ratings),
            status,
            text: text.into(),
        }
    }
}

/// Integer mean of `ratings`, truncated toward zero; 0 when empty.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| i64::from(r)).sum();
    (sum / ratings.len() as i64) as i32
}

/// Predicate accepting only documents with the given status.
pub fn status_filter(
    status: DocumentStatus,
) -> impl Fn(DocId, DocumentStatus, i32) -> bool + Copy + Send + Sync {
    move |_, document_status, _| document_status == status
}
