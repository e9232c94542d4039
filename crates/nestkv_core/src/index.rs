//! Value-equality index.

use std::collections::HashMap;

/// Derived index from value to the number of variables currently holding it.
///
/// Only current top-of-history values are counted; shadowed frames and
/// cleared slots never appear here. Counts that reach zero are removed,
/// so absence always means zero and `count` is O(1).
#[derive(Debug, Default)]
pub struct ValueIndex {
    counts: HashMap<String, usize>,
}

impl ValueIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables currently equal to `value`.
    #[must_use]
    pub fn count(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Records one more variable holding `value`.
    pub fn increment(&mut self, value: &str) {
        *self.counts.entry(value.to_string()).or_insert(0) += 1;
    }

    /// Records one fewer variable holding `value`.
    ///
    /// Zero-count entries are removed rather than stored.
    pub fn decrement(&mut self, value: &str) {
        if let Some(count) = self.counts.get_mut(value) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(value);
            }
        }
    }

    /// Number of distinct values currently held by at least one variable.
    #[must_use]
    pub fn distinct_values(&self) -> usize {
        self.counts.len()
    }

    /// Whether no variable currently holds any value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
