//! Shared utility modules.

pub mod paginate;
pub mod timing;
