//! Local key-value persistence for session state.
//!
//! This module provides:
//! - `KvStore`: a flat string-to-string store backed by a JSON file
//! - `StoreError`: the read/write failure kinds surfaced to callers
//!
//! The store is deliberately dumb: callers address values by string key
//! and decide for themselves what a failure means.

pub mod error;
pub mod kv;

pub use kv::KvStore;
