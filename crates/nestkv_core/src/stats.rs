//! Store statistics.
//!
//! Operation counters for diagnostics. Counters use relaxed atomics so
//! read-only operations can record themselves through a shared reference.

use std::sync::atomic::{AtomicU64, Ordering};

/// Operation counters for a store.
#[derive(Debug, Default)]
pub struct StoreStats {
    /// Total `set` operations.
    sets: AtomicU64,
    /// Total `unset` operations.
    unsets: AtomicU64,
    /// Total `get` operations.
    gets: AtomicU64,
    /// Total equality-count lookups.
    count_lookups: AtomicU64,
    /// Total scopes opened.
    scopes_opened: AtomicU64,
    /// Successful commits.
    commits: AtomicU64,
    /// Successful rollbacks.
    rollbacks: AtomicU64,
    /// Commits refused for lack of an open scope.
    failed_commits: AtomicU64,
    /// Rollbacks refused for lack of an open scope.
    failed_rollbacks: AtomicU64,
}

impl StoreStats {
    /// Creates a zeroed stats instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_set(&self) {
        self.sets.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_unset(&self) {
        self.unsets.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_get(&self) {
        self.gets.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_count_lookup(&self) {
        self.count_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scope_opened(&self) {
        self.scopes_opened.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_commit(&self) {
        self.commits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_rollback(&self) {
        self.rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed_commit(&self) {
        self.failed_commits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failed_rollback(&self) {
        self.failed_rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Takes a point-in-time snapshot of all counters.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            sets: self.sets.load(Ordering::Relaxed),
            unsets: self.unsets.load(Ordering::Relaxed),
            gets: self.gets.load(Ordering::Relaxed),
            count_lookups: self.count_lookups.load(Ordering::Relaxed),
            scopes_opened: self.scopes_opened.load(Ordering::Relaxed),
            commits: self.commits.load(Ordering::Relaxed),
            rollbacks: self.rollbacks.load(Ordering::Relaxed),
            failed_commits: self.failed_commits.load(Ordering::Relaxed),
            failed_rollbacks: self.failed_rollbacks.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of store statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Total `set` operations.
    pub sets: u64,
    /// Total `unset` operations.
    pub unsets: u64,
    /// Total `get` operations.
    pub gets: u64,
    /// Total equality-count lookups.
    pub count_lookups: u64,
    /// Total scopes opened.
    pub scopes_opened: u64,
    /// Successful commits.
    pub commits: u64,
    /// Successful rollbacks.
    pub rollbacks: u64,
    /// Commits refused for lack of an open scope.
    pub failed_commits: u64,
    /// Rollbacks refused for lack of an open scope.
    pub failed_rollbacks: u64,
}
