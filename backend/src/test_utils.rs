//! Shared fixtures for unit tests

use chrono::{TimeZone, Utc};
use shared::{Animal, AnimalStatus};

use crate::config::ShelterConfig;
use crate::domain::AnimalService;
use crate::storage::MemoryStore;

/// Route `log` output through the test harness; safe to call repeatedly
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Empty store over fresh memory storage with default settings
pub fn setup_test_service() -> AnimalService<MemoryStore> {
    AnimalService::load(MemoryStore::new(), ShelterConfig::default())
}

/// Available animal with only the required fields filled in
pub fn sample_animal(id: &str, name: &str, species: &str) -> Animal {
    Animal {
        id: id.to_string(),
        name: name.to_string(),
        species: species.to_string(),
        breed: String::new(),
        age: String::new(),
        gender: String::new(),
        size: String::new(),
        health: String::new(),
        temperament: String::new(),
        description: String::new(),
        special_needs: String::new(),
        status: AnimalStatus::Available,
        registration_date: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        photos: Vec::new(),
    }
}
