//! Term interning.
//!
//! Postings never borrow from document text. Each distinct term is stored
//! once as an `Arc<str>` and referenced everywhere else by its [`TermId`].

use std::sync::Arc;

use ahash::AHashMap;

/// Dense handle of an interned term.
pub type TermId = u32;

/// Interned terms of the live documents.
///
/// Ids of released terms are handed out again by [`intern`](Self::intern),
/// so the slot count is bounded by the peak number of distinct live terms.
#[derive(Debug, Default)]
pub struct TermDictionary {
    ids: AHashMap<Arc<str>, TermId>,
    terms: Vec<Option<Arc<str>>>,
    free: Vec<TermId>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, term: &str) -> Option<TermId> {
        self.ids.get(term).copied()
    }

    /// Return the id of `term`, assigning a released or new id on first
    /// sight.
    pub fn intern(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let term: Arc<str> = Arc::from(term);
        let id = match self.free.pop() {
            Some(id) => {
                self.terms[id as usize] = Some(term.clone());
                id
            }
            None => {
                self.terms.push(Some(term.clone()));
                (self.terms.len() - 1) as TermId
            }
        };
        self.ids.insert(term, id);
        id
    }

    /// Forget the term behind `id`. Returns `false` for an id not in use.
    pub fn release(&mut self, id: TermId) -> bool {
        let Some(term) = self.terms.get_mut(id as usize).and_then(Option::take) else {
            return false;
        };
        self.ids.remove(&term);
        self.free.push(id);
        true
    }

    /// Text of an interned term.
    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms
            .get(id as usize)
            .and_then(|term| term.as_deref())
    }

    /// Number of terms in use.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Allocated id slots, released ones included.
    pub fn capacity(&self) -> usize {
        self.terms.len()
    }
}
