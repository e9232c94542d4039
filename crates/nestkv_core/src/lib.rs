//! # NestKV Core
//!
//! Transactional in-memory key/value store engine for NestKV.
//!
//! This crate provides:
//! - Per-variable version histories (at most one frame per open scope)
//! - Nested transaction scopes with commit and rollback
//! - An O(1) value-equality index derived from current values
//! - Operation statistics
//!
//! The whole engine is a single owned aggregate, [`Store`]. There is no
//! ambient or static state and no locking; a store instance is driven by
//! one strictly sequential command stream.
//!
//! ```rust
//! use nestkv_core::Store;
//!
//! let mut store = Store::new();
//! store.set("a", "10");
//! store.begin();
//! store.set("a", "20");
//! assert_eq!(store.get("a"), Some("20"));
//! store.rollback().unwrap();
//! assert_eq!(store.get("a"), Some("10"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod history;
mod index;
mod stats;
mod store;
mod transaction;

pub use error::{StoreError, StoreResult};
pub use history::{VersionFrame, VersionHistory};
pub use index::ValueIndex;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::Store;
pub use transaction::Scope;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
