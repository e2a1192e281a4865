//! # Storage Module
//!
//! Persistence for the record store. The store writes one string blob per
//! named slot and reads it back on startup; nothing else is asked of a backend.
//!
//! ## Implementations
//!
//! - **MemoryStore**: in-process map, used by tests and as a scratch store
//! - **FileStore**: one `<key>.json` file per slot under a base directory
//!
//! The browser build supplies its own `KeyValueStore` over `window.localStorage`
//! in the frontend crate.

pub mod file_store;
pub mod memory;
pub mod traits;

pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
