//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer run
//! against browser local storage, flat files, or memory without modification.

use anyhow::Result;

/// Synchronous key-value slot storage
///
/// Every write replaces the whole value stored under `key`. There are no
/// partial updates and no transactions.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the slot was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
