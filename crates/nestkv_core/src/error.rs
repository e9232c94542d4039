//! Error types for the NestKV store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// The taxonomy is deliberately narrow: absence is signalled by `Option`
/// or a zero count, never by an error, and no operation is fatal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Commit or rollback was requested while no transaction scope is open.
    #[error("no transaction in progress")]
    NoTransaction,
}
