//! Concurrency substrate used by the parallel execution paths.
//!
//! - [`sharded_map`]: lock-sharded accumulator with per-key exclusive access
//! - [`partition`]: splitting work into a fixed number of chunks run on the
//!   rayon pool behind a join barrier

pub mod partition;
pub mod sharded_map;

use serde::{Deserialize, Serialize};

pub use partition::{chunk_ranges, for_each_partitioned, for_each_partitioned_mut};
pub use sharded_map::{Access, ShardKey, ShardedMap};

/// Execution discipline selected per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Single-threaded, deterministic ascending iteration.
    #[default]
    Sequential,
    /// Partitioned across the rayon thread pool; joined before returning.
    Parallel,
}
