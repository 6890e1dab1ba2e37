//! Deterministic id assignment for one render pass
//!
//! The allocator is owned by the form-build call, not the process: two forms
//! rendered in the same process never collide, and re-rendering the same
//! definition sequence always yields the same ids.

use std::collections::HashMap;

/// Per-name counter producing `name`, `name-1`, `name-2`, ... in first-seen
/// order.
#[derive(Debug, Default)]
pub struct IdAllocator {
    counts: HashMap<String, u32>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next id for `name`.
    ///
    /// The first occurrence gets the bare name; later occurrences get a
    /// numeric suffix.
    pub fn assign(&mut self, name: &str) -> String {
        let count = self.counts.entry(name.to_string()).or_insert(0);
        let id = if *count == 0 {
            name.to_string()
        } else {
            format!("{name}-{count}")
        };
        *count += 1;
        id
    }
}
