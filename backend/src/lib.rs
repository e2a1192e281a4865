//! # Shelter Backend
//!
//! All non-UI logic for the animal shelter record keeper.
//!
//! - **Domain**: the record store and the projections derived from it
//! - **Storage**: key-value slot persistence (memory, files; the browser build
//!   brings its own local storage adapter)
//! - **Config**: YAML-loadable settings shared with the frontend
//!
//! The backend is UI-agnostic: the Yew frontend constructs one `AnimalService`
//! over its storage adapter and drives it directly, in process.
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! Domain Layer (AnimalService, projections, export)
//!     ↓
//! Storage Layer (KeyValueStore)
//! ```

pub mod config;
pub mod domain;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{ConfigError, ShelterConfig};
pub use domain::*;
pub use storage::*;
