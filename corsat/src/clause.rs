//! Clause storage.

pub mod alloc;

pub use alloc::{ClauseAlloc, ClauseRef};
