//! Housekeeping operations over a populated engine.

pub mod duplicates;

pub use duplicates::{find_duplicates, remove_duplicates};
