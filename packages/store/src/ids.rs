//! Identifier generation for new resources.
//!
//! [`UuidIds`] is the production generator (random v4 UUIDs). [`SequentialIds`]
//! hands out `"1"`, `"2"`, ... and exists so tests can predict identifiers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique resource identifiers.
pub trait IdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Monotonic counter starting at 1.
#[derive(Debug, Default)]
pub struct SequentialIds {
    last: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        (self.last.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }
}
