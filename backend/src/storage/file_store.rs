//! # File Store
//!
//! Directory-backed slot storage for native builds. Each key maps to a single
//! JSON file under the base directory:
//!
//! ```text
//! data/
//! ├── ong_animals.json
//! └── ...
//! ```
//!
//! Writes go to a temporary sibling file first and are then renamed over the
//! target, so a reader never observes a half-written snapshot.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    base_directory: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the file backing `key`
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.base_directory
            .join(format!("{}.json", Self::safe_file_stem(key)))
    }

    /// Map an arbitrary key to a safe file stem: "Ong animals/v2" -> "Ong_animals_v2".
    /// Case is kept so keys differing only in case use different files.
    pub fn safe_file_stem(key: &str) -> String {
        let stem: String = key
            .chars()
            .map(|c| match c {
                c if c.is_ascii_alphanumeric() => c,
                '-' | '.' => c,
                _ => '_',
            })
            .collect();

        if stem.trim_matches(|c| c == '_' || c == '.').is_empty() {
            "slot".to_string()
        } else {
            stem
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            debug!("No file for slot {} at {}", key, path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &path)
            .with_context(|| format!("Failed to replace {}", path.display()))?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data")).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(FileStore::safe_file_stem("ong_animals"), "ong_animals");
        assert_eq!(FileStore::safe_file_stem("Ong Animals/v2"), "Ong_Animals_v2");
        assert_eq!(FileStore::safe_file_stem("../.."), "slot");
        assert_eq!(FileStore::safe_file_stem(""), "slot");
    }

    #[test]
    fn test_creates_base_directory() {
        let (store, _temp_dir) = setup_test_store();
        assert!(store.base_directory().is_dir());
    }

    #[test]
    fn test_missing_slot_reads_as_none() {
        let (store, _temp_dir) = setup_test_store();
        assert_eq!(store.get("ong_animals").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let (store, _temp_dir) = setup_test_store();

        store.set("ong_animals", "[]").unwrap();
        store.set("ong_animals", r#"[{"id":"1"}]"#).unwrap();

        assert_eq!(
            store.get("ong_animals").unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
        assert!(store.slot_path("ong_animals").exists());
        assert!(!store.slot_path("ong_animals").with_extension("json.tmp").exists());
    }

    #[test]
    fn test_keys_differing_in_case_use_separate_slots() {
        let (store, _temp_dir) = setup_test_store();

        store.set("Animals", "[1]").unwrap();
        store.set("animals", "[2]").unwrap();

        assert_ne!(store.slot_path("Animals"), store.slot_path("animals"));
        assert_eq!(store.get("Animals").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.get("animals").unwrap().as_deref(), Some("[2]"));
    }
}
