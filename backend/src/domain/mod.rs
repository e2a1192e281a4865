//! # Domain Module
//!
//! Business logic for the shelter's animal records, independent of any UI
//! framework or storage mechanism.
//!
//! - **animal_service**: the record store; add, update, delete, status changes,
//!   import, and the queries the UI renders from
//! - **projections**: pure read-only views (filtered list, statistics, cards, detail)
//! - **export_service**: snapshot naming, encoding and parsing
//!
//! Every mutation persists the full collection before returning. Projections
//! are recomputed on demand; nothing is cached.

pub mod animal_service;
pub mod export_service;
pub mod projections;

pub use animal_service::{AnimalService, Confirmation, DELETE_PROMPT};
pub use export_service::ExportService;
