//! Transaction scoping.
//!
//! Scopes nest arbitrarily deep. A write inside scope *i* is only applied
//! to scope *i-1*'s view when everything in flight is committed, and is
//! discarded entirely when scope *i* rolls back.

mod scope;

pub use scope::Scope;
