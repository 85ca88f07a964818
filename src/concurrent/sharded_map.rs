//! Lock-sharded map used to accumulate scores from many tasks at once.
//!
//! Keys are routed to a shard with `key mod shard_count`; each shard is an
//! ordinary `BTreeMap` behind its own `parking_lot::Mutex`. No operation
//! ever holds two shard locks at the same time.

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

/// Keys that can be routed to a shard by their integer value.
pub trait ShardKey: Ord + Copy {
    fn route(&self) -> u64;
}

macro_rules! impl_shard_key {
    ($($ty:ty),*) => {
        $(
            impl ShardKey for $ty {
                #[inline]
                fn route(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

impl_shard_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Fixed-shard concurrent map.
#[derive(Debug)]
pub struct ShardedMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

/// Exclusive access to one slot of a [`ShardedMap`].
///
/// The owning shard stays locked until the guard is dropped, so keep it
/// for a single read-modify-write.
pub struct Access<'a, V> {
    slot: MappedMutexGuard<'a, V>,
}

impl<V> Deref for Access<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        &self.slot
    }
}

impl<V> DerefMut for Access<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        &mut self.slot
    }
}

impl<K: ShardKey, V> ShardedMap<K, V> {
    /// Create a map with `shard_count` shards (at least one).
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        ShardedMap {
            shards: (0..shard_count).map(|_| Mutex::new(BTreeMap::new())).collect(),
        }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Shard owning `key`. Deterministic for the lifetime of the map.
    pub fn shard_index(&self, key: &K) -> usize {
        (key.route() % self.shards.len() as u64) as usize
    }

    /// Lock the owning shard and return the slot for `key`, inserting
    /// `V::default()` when absent.
    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let shard = self.shards[self.shard_index(&key)].lock();
        Access {
            slot: MutexGuard::map(shard, |map| map.entry(key).or_default()),
        }
    }

    /// Remove `key`, locking only its shard.
    pub fn erase(&self, key: &K) -> Option<V> {
        self.shards[self.shard_index(key)].lock().remove(key)
    }

    /// Number of entries. Shards are counted one after another, so the
    /// value is only exact when no other task is writing.
    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain every shard, one lock at a time, into a single ordered map.
    pub fn snapshot(&self) -> BTreeMap<K, V> {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            let mut shard = shard.lock();
            merged.append(&mut shard);
        }
        merged
    }

    /// Consume the map without locking.
    pub fn into_map(self) -> BTreeMap<K, V> {
        let mut merged = BTreeMap::new();
        for shard in self.shards {
            merged.append(&mut shard.into_inner());
        }
        merged
    }
}
