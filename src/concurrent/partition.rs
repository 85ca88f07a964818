//! Manual work partitioning over the rayon pool.
//!
//! A slice is cut into at most `parts` contiguous chunks, each chunk runs
//! as one task, and the call returns only after every task finished.

use std::ops::Range;

/// Split `0..len` into at most `parts` contiguous, non-empty ranges whose
/// lengths differ by at most one.
pub fn chunk_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let parts = parts.clamp(1, len);
    let base = len / parts;
    let extra = len % parts;

    let mut ranges = Vec::with_capacity(parts);
    let mut start = 0;
    for part in 0..parts {
        let size = base + usize::from(part < extra);
        ranges.push(start..start + size);
        start += size;
    }
    ranges
}

/// Apply `f` to every item, `parts` chunks at a time in parallel.
pub fn for_each_partitioned<T, F>(items: &[T], parts: usize, f: F)
where
    T: Sync,
    F: Fn(&T) + Sync,
{
    let ranges = chunk_ranges(items.len(), parts);
    if ranges.len() <= 1 {
        items.iter().for_each(f);
        return;
    }
    log::trace!("running {} items in {} partitions", items.len(), ranges.len());

    let f = &f;
    rayon::scope(|scope| {
        for range in ranges {
            let chunk = &items[range];
            scope.spawn(move |_| chunk.iter().for_each(f));
        }
    });
}

/// Mutable variant of [`for_each_partitioned`]; every chunk is a disjoint
/// sub-slice.
pub fn for_each_partitioned_mut<T, F>(items: &mut [T], parts: usize, f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync,
{
    let ranges = chunk_ranges(items.len(), parts);
    if ranges.len() <= 1 {
        items.iter_mut().for_each(f);
        return;
    }
    log::trace!("running {} items in {} partitions", items.len(), ranges.len());

    let f = &f;
    let mut rest = items;
    rayon::scope(|scope| {
        for range in ranges {
            let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
            rest = tail;
            scope.spawn(move |_| chunk.iter_mut().for_each(f));
        }
    });
}
