//! Scripted store fixtures and the counting oracle.

use crate::generators::StoreOp;
use nestkv_core::Store;
use std::collections::{HashMap, HashSet};

/// A store driven by a script of operations, tracking every name and
/// value the script mentioned so the index can be verified by brute
/// force afterwards.
#[derive(Debug, Default)]
pub struct ScriptedStore {
    /// The store under test.
    pub store: Store,
    /// Every variable name the script has mentioned.
    names: HashSet<String>,
    /// Every value the script has mentioned.
    values: HashSet<String>,
}

impl ScriptedStore {
    /// Creates a fixture around a fresh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one operation.
    ///
    /// Failing commits and rollbacks are expected for generated scripts
    /// and are swallowed; the consistency check covers them.
    pub fn apply(&mut self, op: &StoreOp) {
        match op {
            StoreOp::Set { name, value } => {
                self.names.insert(name.clone());
                self.values.insert(value.clone());
                self.store.set(name, value);
            }
            StoreOp::Unset { name } => {
                self.names.insert(name.clone());
                self.store.unset(name);
            }
            StoreOp::Get { name } => {
                self.names.insert(name.clone());
                let _ = self.store.get(name);
            }
            StoreOp::NumEqualTo { value } => {
                self.values.insert(value.clone());
                let _ = self.store.num_equal_to(value);
            }
            StoreOp::Begin => self.store.begin(),
            StoreOp::Commit => {
                let _ = self.store.commit();
            }
            StoreOp::Rollback => {
                let _ = self.store.rollback();
            }
        }
    }

    /// Applies a whole script in order.
    pub fn apply_all(&mut self, ops: &[StoreOp]) {
        for op in ops {
            self.apply(op);
        }
    }

    /// Recounts value equality by brute force over every name seen.
    #[must_use]
    pub fn recount(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for name in &self.names {
            if let Some(value) = self.store.get(name) {
                *counts.entry(value.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Asserts the O(1) index agrees with the brute-force recount for
    /// every value the script mentioned.
    ///
    /// # Panics
    ///
    /// Panics when any count diverges.
    pub fn assert_index_consistent(&self) {
        let counts = self.recount();
        for value in &self.values {
            let expected = counts.get(value).copied().unwrap_or(0);
            let actual = self.store.num_equal_to(value);
            assert_eq!(
                actual, expected,
                "index drift for value {value:?}: index says {actual}, recount says {expected}"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(name: &str, value: &str) -> StoreOp {
        StoreOp::Set {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn tracks_names_and_values() {
        let mut scripted = ScriptedStore::new();
        scripted.apply_all(&[set("a", "10"), set("b", "10"), set("a", "20")]);

        let counts = scripted.recount();
        assert_eq!(counts.get("10"), Some(&1));
        assert_eq!(counts.get("20"), Some(&1));
        scripted.assert_index_consistent();
    }

    #[test]
    fn consistent_through_rollback() {
        let mut scripted = ScriptedStore::new();
        scripted.apply_all(&[
            set("a", "10"),
            StoreOp::Begin,
            set("a", "20"),
            StoreOp::Rollback,
        ]);

        scripted.assert_index_consistent();
        assert_eq!(scripted.store.get("a"), Some("10"));
    }

    #[test]
    fn failed_transaction_ops_are_swallowed() {
        let mut scripted = ScriptedStore::new();
        scripted.apply_all(&[StoreOp::Commit, StoreOp::Rollback, set("a", "10")]);

        scripted.assert_index_consistent();
        assert_eq!(scripted.store.depth(), 0);
    }
}
