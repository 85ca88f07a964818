//! Fixed-size pages over a slice.

use std::iter::FusedIterator;

use crate::error::{Result, SieveError};

/// Consecutive, non-overlapping pages of up to `page_size` items.
///
/// The last page may be shorter; an empty slice has no pages.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    pages: Vec<&'a [T]>,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(SieveError::invalid_argument("page size must be positive"));
        }
        Ok(Paginator {
            pages: items.chunks(page_size).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&'a [T]> {
        self.pages.get(index).copied()
    }

    pub fn iter(&self) -> Pages<'_, 'a, T> {
        Pages {
            inner: self.pages.iter(),
        }
    }
}

/// Iterator over the pages of a [`Paginator`].
#[derive(Debug, Clone)]
pub struct Pages<'p, 'a, T> {
    inner: std::slice::Iter<'p, &'a [T]>,
}

impl<'a, T> Iterator for Pages<'_, 'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Pages<'_, '_, T> {}

impl<T> FusedIterator for Pages<'_, '_, T> {}

impl<'p, 'a, T> IntoIterator for &'p Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = Pages<'p, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Shorthand for [`Paginator::new`].
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<Paginator<'_, T>> {
    Paginator::new(items, page_size)
}
