//! Property-based operation generators using proptest.
//!
//! Names and values are drawn from small alphabets so generated scripts
//! collide often; the literal value `UNSET` is generated deliberately,
//! since the store must treat it as ordinary data.

use proptest::prelude::*;

/// One store operation for generated scripts.
#[derive(Debug, Clone)]
pub enum StoreOp {
    /// Set a variable to a value.
    Set {
        /// Variable name.
        name: String,
        /// Value to store.
        value: String,
    },
    /// Clear a variable.
    Unset {
        /// Variable name.
        name: String,
    },
    /// Read a variable.
    Get {
        /// Variable name.
        name: String,
    },
    /// Count variables equal to a value.
    NumEqualTo {
        /// Value to count.
        value: String,
    },
    /// Open a transaction scope.
    Begin,
    /// Apply and close all open scopes.
    Commit,
    /// Undo and close the innermost scope.
    Rollback,
}

/// Strategy for variable names drawn from a five-letter alphabet.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]").expect("invalid name regex")
}

/// Strategy for values: single digits, plus the literal text `UNSET`.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::string::string_regex("[0-9]").expect("invalid value regex"),
        1 => Just("UNSET".to_string()),
    ]
}

/// Strategy for a single weighted store operation.
pub fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        4 => (name_strategy(), value_strategy())
            .prop_map(|(name, value)| StoreOp::Set { name, value }),
        2 => name_strategy().prop_map(|name| StoreOp::Unset { name }),
        2 => name_strategy().prop_map(|name| StoreOp::Get { name }),
        2 => value_strategy().prop_map(|value| StoreOp::NumEqualTo { value }),
        2 => Just(StoreOp::Begin),
        1 => Just(StoreOp::Commit),
        2 => Just(StoreOp::Rollback),
    ]
}

/// Strategy for a sequence of operations.
pub fn op_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(store_op_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
