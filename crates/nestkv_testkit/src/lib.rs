//! # NestKV Testkit
//!
//! Test utilities for NestKV.
//!
//! This crate provides:
//! - Scripted store fixtures with a brute-force counting oracle
//! - Property-based operation generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use nestkv_testkit::prelude::*;
//!
//! let mut scripted = ScriptedStore::new();
//! scripted.apply(&StoreOp::Set {
//!     name: "a".to_string(),
//!     value: "10".to_string(),
//! });
//! scripted.assert_index_consistent();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
