//! The transactional store.

use crate::error::{StoreError, StoreResult};
use crate::history::{VersionFrame, VersionHistory};
use crate::index::ValueIndex;
use crate::stats::{StatsSnapshot, StoreStats};
use crate::transaction::Scope;
use std::collections::{HashMap, HashSet};

/// The transactional key/value store.
///
/// `Store` owns the three structures the engine is built from: per-variable
/// version histories, the value-equality index derived from their current
/// tops, and the stack of open transaction scopes. All state is private to
/// the instance.
///
/// # Transaction protocol
///
/// [`begin`](Store::begin) opens a nested scope. [`rollback`](Store::rollback)
/// undoes and closes the innermost scope only. [`commit`](Store::commit)
/// applies and closes **all** open scopes in one step; there is no partial
/// commit of a subset of nesting levels.
///
/// # Example
///
/// ```rust
/// use nestkv_core::Store;
///
/// let mut store = Store::new();
/// store.set("a", "10");
/// store.begin();
/// store.set("a", "20");
/// store.begin();
/// store.unset("a");
/// assert_eq!(store.get("a"), None);
/// store.rollback().unwrap();
/// assert_eq!(store.get("a"), Some("20"));
/// store.commit().unwrap();
/// assert_eq!(store.get("a"), Some("20"));
/// assert!(!store.is_in_transaction());
/// ```
#[derive(Debug, Default)]
pub struct Store {
    /// Variable name to its version history. Entries are created lazily on
    /// first write and never removed, even when the history drains.
    histories: HashMap<String, VersionHistory>,
    /// Derived view of current top values.
    index: ValueIndex,
    /// Open transaction scopes, innermost last.
    scopes: Vec<Scope>,
    /// Operation counters.
    stats: StoreStats,
}

impl Store {
    /// Creates an empty store with no open transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `name`.
    ///
    /// Inside a transaction the first write to a variable stacks a new
    /// history frame for the innermost scope; any later write within the
    /// same scope replaces that frame, so a scope never contributes more
    /// than one frame per variable. Outside any transaction the write
    /// replaces the single base frame.
    pub fn set(&mut self, name: &str, value: &str) {
        self.stats.record_set();
        self.write(name, VersionFrame::Value(value.to_string()));
    }

    /// Clears `name`'s value.
    ///
    /// Bookkeeping is identical to [`set`](Store::set) with a `Cleared`
    /// frame: the variable reads as absent afterwards, but its history
    /// slot survives so commit and rollback have a frame to work with.
    pub fn unset(&mut self, name: &str) {
        self.stats.record_unset();
        self.write(name, VersionFrame::Cleared);
    }

    /// Returns the current value of `name`.
    ///
    /// `None` when the name was never written, or its current frame is
    /// cleared. Never mutates store state.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.stats.record_get();
        self.histories.get(name).and_then(VersionHistory::current)
    }

    /// Number of variables currently equal to `value`. O(1).
    #[must_use]
    pub fn num_equal_to(&self, value: &str) -> usize {
        self.stats.record_count_lookup();
        self.index.count(value)
    }

    /// Opens a new transaction scope. Scopes nest arbitrarily deep.
    pub fn begin(&mut self) {
        self.scopes.push(Scope::new());
        self.stats.record_scope_opened();
        tracing::debug!(depth = self.scopes.len(), "transaction scope opened");
    }

    /// Applies and closes **all** open transaction scopes in one step.
    ///
    /// Every variable touched by any open scope has its history collapsed
    /// to the current top frame. Buried frames were not index-counted, so
    /// the index is untouched.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoTransaction`] when no scope is open; the store is
    /// left unchanged.
    pub fn commit(&mut self) -> StoreResult<()> {
        if self.scopes.is_empty() {
            self.stats.record_failed_commit();
            return Err(StoreError::NoTransaction);
        }

        let mut touched: HashSet<String> = HashSet::new();
        for scope in self.scopes.drain(..) {
            touched.extend(scope.into_touched());
        }
        for name in &touched {
            if let Some(history) = self.histories.get_mut(name) {
                history.flatten();
            }
        }

        self.stats.record_commit();
        tracing::debug!(variables = touched.len(), "all open scopes committed");
        Ok(())
    }

    /// Undoes and closes the innermost transaction scope only.
    ///
    /// Each variable touched by that scope loses its top frame; the frame
    /// underneath becomes current again and the index follows. Outer
    /// scopes remain open and untouched.
    ///
    /// # Errors
    ///
    /// [`StoreError::NoTransaction`] when no scope is open; the store is
    /// left unchanged.
    pub fn rollback(&mut self) -> StoreResult<()> {
        let Some(scope) = self.scopes.pop() else {
            self.stats.record_failed_rollback();
            return Err(StoreError::NoTransaction);
        };

        let undone = scope.touch_count();
        for name in scope.into_touched() {
            if let Some(history) = self.histories.get_mut(&name) {
                if let Some(popped) = history.pop() {
                    if let Some(value) = popped.value() {
                        self.index.decrement(value);
                    }
                }
                if let Some(revealed) = history.current() {
                    self.index.increment(revealed);
                }
            }
        }

        self.stats.record_rollback();
        tracing::debug!(
            variables = undone,
            depth = self.scopes.len(),
            "innermost scope rolled back"
        );
        Ok(())
    }

    /// Number of open transaction scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Whether at least one transaction scope is open.
    #[must_use]
    pub fn is_in_transaction(&self) -> bool {
        !self.scopes.is_empty()
    }

    /// Number of variables currently holding a value.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.histories
            .values()
            .filter(|history| history.current().is_some())
            .count()
    }

    /// Takes a snapshot of the operation counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Applies one write, keeping the index a strict derived view of
    /// current top values.
    fn write(&mut self, name: &str, frame: VersionFrame) {
        let history = self.histories.entry(name.to_string()).or_default();

        // First write in the innermost scope stacks a frame; a repeat
        // write within the same scope, or any write outside a scope,
        // replaces the top frame instead.
        let stack_new_frame = match self.scopes.last_mut() {
            Some(scope) => {
                if scope.touches(name) {
                    false
                } else {
                    scope.mark_touched(name);
                    true
                }
            }
            None => false,
        };

        if let Some(new_value) = frame.value() {
            self.index.increment(new_value);
        }

        if stack_new_frame {
            // The shadowed top stops being a current value.
            if let Some(shadowed) = history.current() {
                self.index.decrement(shadowed);
            }
            history.push(frame);
        } else if let Some(previous) = history.replace_top(frame) {
            if let Some(old_value) = previous.value() {
                self.index.decrement(old_value);
            }
        }
    }
}
