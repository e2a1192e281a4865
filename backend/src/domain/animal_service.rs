use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use shared::{
    Animal, AnimalCard, AnimalDetail, AnimalDraft, AnimalQuery, AnimalResponse, AnimalStatus,
    DeleteOutcome, ExportFile, ImportResponse, Notification, StatusFilter, Statistics,
};

use crate::config::ShelterConfig;
use crate::domain::export_service::ExportService;
use crate::domain::projections;
use crate::storage::KeyValueStore;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this animal?";

/// Yes/no gate in front of destructive operations
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirmation for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// The shelter's record store
///
/// Owns the ordered animal collection and mirrors it into a single storage slot
/// after every mutation. The slot is always rewritten wholesale.
#[derive(Debug)]
pub struct AnimalService<S: KeyValueStore> {
    storage: S,
    config: ShelterConfig,
    exporter: ExportService,
    animals: Vec<Animal>,
}

impl<S: KeyValueStore> AnimalService<S> {
    /// Load the collection from `storage`; missing or unreadable data starts empty
    pub fn load(storage: S, config: ShelterConfig) -> Self {
        let animals = match storage.get(&config.storage_key) {
            Ok(Some(blob)) => match ExportService::parse_snapshot(&blob) {
                Ok(animals) => animals,
                Err(e) => {
                    warn!("Stored animals under {} are unreadable, starting empty: {:#}", config.storage_key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read {} from storage, starting empty: {:#}", config.storage_key, e);
                Vec::new()
            }
        };

        info!("Loaded {} animals from {}", animals.len(), config.storage_key);

        Self {
            exporter: ExportService::new(config.export_file_prefix.clone()),
            storage,
            config,
            animals,
        }
    }

    pub fn config(&self) -> &ShelterConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    pub fn get(&self, animal_id: &str) -> Option<&Animal> {
        self.animals.iter().find(|animal| animal.id == animal_id)
    }

    /// Register a new animal from an already validated draft
    pub fn add(&mut self, draft: AnimalDraft) -> Result<AnimalResponse> {
        info!("Registering animal: name={}, species={}", draft.name, draft.species);

        let mut animal = Animal {
            id: Animal::generate_id(Uuid::new_v4()),
            name: String::new(),
            species: String::new(),
            breed: String::new(),
            age: String::new(),
            gender: String::new(),
            size: String::new(),
            health: String::new(),
            temperament: String::new(),
            description: String::new(),
            special_needs: String::new(),
            status: AnimalStatus::Available,
            registration_date: Utc::now(),
            photos: Vec::new(),
        };
        animal.apply_draft(draft);

        let mut next = self.animals.clone();
        next.push(animal.clone());
        self.commit(next)?;

        info!("Registered animal: {} with ID: {}", animal.name, animal.id);

        Ok(AnimalResponse {
            animal,
            notification: Notification::success("Animal registered successfully!"),
        })
    }

    /// Merge `draft` over the record with `animal_id`. Unknown ids are a silent no-op.
    pub fn update(&mut self, animal_id: &str, draft: AnimalDraft) -> Result<Option<AnimalResponse>> {
        let Some(index) = self.position(animal_id) else {
            warn!("Update skipped, animal not found: {}", animal_id);
            return Ok(None);
        };

        let mut next = self.animals.clone();
        next[index].apply_draft(draft);
        let animal = next[index].clone();
        self.commit(next)?;

        info!("Updated animal: {} with ID: {}", animal.name, animal.id);

        Ok(Some(AnimalResponse {
            animal,
            notification: Notification::success("Animal updated successfully!"),
        }))
    }

    /// Remove the record with `animal_id` once `confirmation` agrees
    pub fn delete(&mut self, animal_id: &str, confirmation: &impl Confirmation) -> Result<DeleteOutcome> {
        if !confirmation.confirm(DELETE_PROMPT) {
            debug!("Delete of {} declined", animal_id);
            return Ok(DeleteOutcome::Declined);
        }

        let Some(index) = self.position(animal_id) else {
            warn!("Delete skipped, animal not found: {}", animal_id);
            return Ok(DeleteOutcome::NotFound);
        };

        let mut next = self.animals.clone();
        let animal = next.remove(index);
        self.commit(next)?;

        info!("Deleted animal: {} with ID: {}", animal.name, animal.id);

        Ok(DeleteOutcome::Deleted {
            animal,
            notification: Notification::success("Animal deleted successfully!"),
        })
    }

    /// Move a record to `status`. Unknown ids are a silent no-op.
    pub fn set_status(&mut self, animal_id: &str, status: AnimalStatus) -> Result<Option<AnimalResponse>> {
        let Some(index) = self.position(animal_id) else {
            warn!("Status change skipped, animal not found: {}", animal_id);
            return Ok(None);
        };

        let mut next = self.animals.clone();
        next[index].status = status;
        let animal = next[index].clone();
        self.commit(next)?;

        info!("Animal {} is now {}", animal.id, status.as_str());

        Ok(Some(AnimalResponse {
            animal,
            notification: Notification::success(format!("Status updated to: {}", status.label())),
        }))
    }

    /// Records matching both halves of `query`, in insertion order
    pub fn list(&self, query: &AnimalQuery) -> Vec<&Animal> {
        let visible = projections::filter(&self.animals, query);
        debug!(
            "Listing {} of {} animals (status={}, search={:?})",
            visible.len(),
            self.animals.len(),
            query.status.as_tag(),
            query.search
        );
        visible
    }

    pub fn search(&self, text: &str) -> Vec<&Animal> {
        self.list(&AnimalQuery::search(text))
    }

    pub fn filter_by_status(&self, status: StatusFilter) -> Vec<&Animal> {
        self.list(&AnimalQuery::status(status))
    }

    pub fn statistics(&self) -> Statistics {
        projections::statistics(&self.animals)
    }

    /// Card data for every record visible under `query`
    pub fn cards(&self, query: &AnimalQuery) -> Vec<AnimalCard> {
        self.list(query)
            .into_iter()
            .map(|animal| projections::card(animal, &self.config.placeholder_image))
            .collect()
    }

    pub fn detail(&self, animal_id: &str) -> Option<AnimalDetail> {
        self.get(animal_id).map(projections::detail)
    }

    /// Snapshot of the whole collection, named with today's date
    pub fn export(&self) -> Result<ExportFile> {
        self.exporter
            .export_file(&self.animals, Utc::now().date_naive())
    }

    /// Replace the whole collection with the records in `blob`.
    /// On a parse or save failure the current collection is left untouched.
    pub fn import(&mut self, blob: &str) -> Result<ImportResponse> {
        let animals = ExportService::parse_snapshot(blob).context("Error importing data")?;

        self.commit(animals)?;

        info!("Imported {} animals", self.animals.len());

        Ok(ImportResponse {
            imported_count: self.animals.len(),
            notification: Notification::success("Data imported successfully!"),
        })
    }

    fn position(&self, animal_id: &str) -> Option<usize> {
        self.animals.iter().position(|animal| animal.id == animal_id)
    }

    /// Save `next` and only then make it the live collection, so memory and
    /// the storage slot never disagree after a failed write
    fn commit(&mut self, next: Vec<Animal>) -> Result<()> {
        let blob = ExportService::encode_snapshot(&next)?;
        self.storage
            .set(&self.config.storage_key, &blob)
            .with_context(|| format!("Failed to save animals to {}", self.config.storage_key))?;
        self.animals = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_utils::{init_test_logging, sample_animal, setup_test_service};

    #[test]
    fn test_add_assigns_identity_and_status() {
        let mut service = setup_test_service();
        let before = Utc::now();

        let response = service.add(AnimalDraft::new("Rex", "Dog")).unwrap();

        assert!(response.animal.id.starts_with("animal::"));
        assert_eq!(response.animal.status, AnimalStatus::Available);
        assert!(response.animal.registration_date >= before);
        assert!(response.animal.registration_date <= Utc::now());
        assert_eq!(response.notification, Notification::success("Animal registered successfully!"));
        assert_eq!(service.statistics().available, 1);
        assert_eq!(service.storage().write_count(), 1);
    }

    #[test]
    fn test_add_keeps_draft_fields() {
        let mut service = setup_test_service();
        let draft = AnimalDraft {
            breed: "Labrador".to_string(),
            age: "3 years".to_string(),
            special_needs: "Daily walk".to_string(),
            ..AnimalDraft::new("Rex", "Dog")
        };

        let animal = service.add(draft).unwrap().animal;
        assert_eq!(animal.breed, "Labrador");
        assert_eq!(animal.age, "3 years");
        assert_eq!(animal.special_needs, "Daily walk");
        assert!(animal.photos.is_empty());
    }

    #[test]
    fn test_update_preserves_identity_status_and_date() {
        let mut service = setup_test_service();
        let original = service.add(AnimalDraft::new("Rex", "Dog")).unwrap().animal;
        service.set_status(&original.id, AnimalStatus::Quarantine).unwrap();

        let response = service
            .update(&original.id, AnimalDraft::new("Rex II", "Dog"))
            .unwrap()
            .expect("animal should exist");

        assert_eq!(response.animal.id, original.id);
        assert_eq!(response.animal.name, "Rex II");
        assert_eq!(response.animal.status, AnimalStatus::Quarantine);
        assert_eq!(response.animal.registration_date, original.registration_date);
        assert_eq!(service.get(&original.id).unwrap().name, "Rex II");
    }

    #[test]
    fn test_set_status_moves_counts() {
        let mut service = setup_test_service();
        let id = service.add(AnimalDraft::new("Rex", "Dog")).unwrap().animal.id;

        let response = service.set_status(&id, AnimalStatus::Adopted).unwrap().unwrap();

        assert_eq!(response.notification.message, "Status updated to: Adopted");
        let stats = service.statistics();
        assert_eq!(stats.adopted, 1);
        assert_eq!(stats.available, 0);
    }

    #[test]
    fn test_unknown_id_is_silent_no_op() {
        init_test_logging();
        let mut service = setup_test_service();
        service.add(AnimalDraft::new("Rex", "Dog")).unwrap();
        let stored = service.storage().get("ong_animals").unwrap();
        let writes = service.storage().write_count();

        assert_eq!(service.update("missing", AnimalDraft::new("X", "Y")).unwrap(), None);
        assert_eq!(service.set_status("missing", AnimalStatus::Adopted).unwrap(), None);
        assert_eq!(service.delete("missing", &|_: &str| true).unwrap(), DeleteOutcome::NotFound);

        assert_eq!(service.storage().get("ong_animals").unwrap(), stored);
        assert_eq!(service.storage().write_count(), writes);
        assert_eq!(service.animals().len(), 1);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut service = setup_test_service();
        let id = service.add(AnimalDraft::new("Rex", "Dog")).unwrap().animal.id;

        let prompts = std::cell::RefCell::new(Vec::new());
        let decline = |prompt: &str| {
            prompts.borrow_mut().push(prompt.to_string());
            false
        };
        assert_eq!(service.delete(&id, &decline).unwrap(), DeleteOutcome::Declined);
        assert_eq!(prompts.borrow().as_slice(), [DELETE_PROMPT.to_string()]);
        assert!(service.get(&id).is_some());

        let outcome = service.delete(&id, &|_: &str| true).unwrap();
        assert_eq!(
            outcome.notification(),
            Some(&Notification::success("Animal deleted successfully!"))
        );
        assert!(service.get(&id).is_none());
        assert!(service.list(&AnimalQuery::default()).is_empty());
    }

    #[test]
    fn test_load_recovers_from_garbage() {
        init_test_logging();
        let storage = MemoryStore::with_value("ong_animals", "{not json");
        let service = AnimalService::load(storage, ShelterConfig::default());
        assert!(service.animals().is_empty());
    }

    #[test]
    fn test_load_reads_persisted_collection() {
        let animals = vec![sample_animal("1", "Rex", "Dog"), sample_animal("2", "Mia", "Cat")];
        let blob = ExportService::encode_snapshot(&animals).unwrap();
        let storage = MemoryStore::with_value("ong_animals", &blob);

        let service = AnimalService::load(storage, ShelterConfig::default());
        assert_eq!(service.animals(), animals.as_slice());
    }

    #[test]
    fn test_import_failure_keeps_state() {
        let mut service = setup_test_service();
        service.add(AnimalDraft::new("Rex", "Dog")).unwrap();
        let writes = service.storage().write_count();

        let error = service.import("[{\"name\": \"no id\"}]").unwrap_err();

        assert!(error.to_string().starts_with("Error importing data"));
        assert_eq!(service.animals().len(), 1);
        assert_eq!(service.storage().write_count(), writes);
    }

    #[test]
    fn test_import_replaces_collection() {
        let mut service = setup_test_service();
        service.add(AnimalDraft::new("Rex", "Dog")).unwrap();
        let incoming = vec![sample_animal("a", "Mia", "Cat"), sample_animal("b", "Bolt", "Dog")];

        let response = service
            .import(&ExportService::encode_snapshot(&incoming).unwrap())
            .unwrap();

        assert_eq!(response.imported_count, 2);
        assert_eq!(service.animals(), incoming.as_slice());
        let reloaded = AnimalService::load(
            MemoryStore::with_value("ong_animals", &service.storage().get("ong_animals").unwrap().unwrap()),
            ShelterConfig::default(),
        );
        assert_eq!(reloaded.animals(), incoming.as_slice());
    }

    #[test]
    fn test_cards_and_detail() {
        let mut service = setup_test_service();
        let id = service.add(AnimalDraft::new("Rex", "Dog")).unwrap().animal.id;

        let cards = service.cards(&AnimalQuery::default());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, id);
        assert_eq!(cards[0].image_src, service.config().placeholder_image);

        assert_eq!(service.detail(&id).unwrap().value_of("Species"), Some("Dog"));
        assert!(service.detail("missing").is_none());
    }

    #[test]
    fn test_export_file_name_has_todays_date() {
        let service = setup_test_service();
        let file = service.export().unwrap();
        let expected = format!("animals_{}.json", Utc::now().date_naive().format("%Y-%m-%d"));
        assert_eq!(file.file_name, expected);
        assert_eq!(file.content, "[]");
    }
}
