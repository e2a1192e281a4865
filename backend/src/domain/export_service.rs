//! Export service domain logic for the shelter record store.
//!
//! Produces the downloadable JSON snapshot of the collection and parses
//! snapshots back, both for import and for the stored blob loaded at startup.
//! The UI only turns an `ExportFile` into a download.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use log::info;
use std::collections::HashSet;

use shared::{Animal, ExportFile};

#[derive(Debug, Clone)]
pub struct ExportService {
    file_prefix: String,
}

impl ExportService {
    pub fn new(file_prefix: impl Into<String>) -> Self {
        Self {
            file_prefix: file_prefix.into(),
        }
    }

    /// `<prefix>_<YYYY-MM-DD>.json`
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}_{}.json", self.file_prefix, date.format("%Y-%m-%d"))
    }

    /// Pretty-printed snapshot of `animals` named for `date`
    pub fn export_file(&self, animals: &[Animal], date: NaiveDate) -> Result<ExportFile> {
        let content =
            serde_json::to_string_pretty(animals).context("Failed to serialize animals for export")?;

        info!("📄 EXPORT: {} animals exported", animals.len());

        Ok(ExportFile {
            file_name: self.file_name(date),
            content,
        })
    }

    /// Compact encoding used for the storage slot
    pub fn encode_snapshot(animals: &[Animal]) -> Result<String> {
        serde_json::to_string(animals).context("Failed to serialize animals")
    }

    /// Parse a full snapshot. Fails as a whole when the text is not a list of
    /// records or when two records share an id.
    pub fn parse_snapshot(blob: &str) -> Result<Vec<Animal>> {
        let animals: Vec<Animal> =
            serde_json::from_str(blob).context("Snapshot is not a valid list of animals")?;

        let mut seen = HashSet::with_capacity(animals.len());
        for animal in &animals {
            if !seen.insert(animal.id.as_str()) {
                bail!("Snapshot contains duplicate animal id {}", animal.id);
            }
        }

        Ok(animals)
    }
}
