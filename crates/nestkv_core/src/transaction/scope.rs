//! An open transaction scope.

use std::collections::HashSet;

/// One open transaction scope.
///
/// Records the variable names first written during this scope's own
/// lifetime, never its ancestors'. The store uses the touch set to decide
/// whether a write stacks a new history frame (first write in this scope)
/// or replaces the frame this scope already pushed.
#[derive(Debug, Default)]
pub struct Scope {
    touched: HashSet<String>,
}

impl Scope {
    /// Creates a scope with an empty touch set.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether this scope has already written `name`.
    #[must_use]
    pub fn touches(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Marks `name` as written by this scope.
    pub(crate) fn mark_touched(&mut self, name: &str) {
        self.touched.insert(name.to_string());
    }

    /// Number of distinct variables written by this scope.
    #[must_use]
    pub fn touch_count(&self) -> usize {
        self.touched.len()
    }

    /// Consumes the scope, yielding its touch set.
    pub(crate) fn into_touched(self) -> HashSet<String> {
        self.touched
    }
}
