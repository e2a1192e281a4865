use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Animal ID in format: "animal::<uuid>"
///
/// Records imported from older snapshots may carry any other opaque string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub breed: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub age: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub gender: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub size: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub health: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub temperament: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub description: String,
    #[serde(default, deserialize_with = "empty_if_null")]
    pub special_needs: String,
    pub status: AnimalStatus,
    /// Captured once at registration, never rewritten
    pub registration_date: DateTime<Utc>,
    /// Image references; only the first one is rendered
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Animal {
    pub fn generate_id(unique: impl fmt::Display) -> String {
        format!("animal::{}", unique)
    }

    /// Overwrite every descriptive field with the draft's values.
    /// `id`, `status`, `registration_date` and `photos` are left alone.
    pub fn apply_draft(&mut self, draft: AnimalDraft) {
        self.name = draft.name;
        self.species = draft.species;
        self.breed = draft.breed;
        self.age = draft.age;
        self.gender = draft.gender;
        self.size = draft.size;
        self.health = draft.health;
        self.temperament = draft.temperament;
        self.description = draft.description;
        self.special_needs = draft.special_needs;
    }
}

// Legacy snapshots store `null` for form fields that were never rendered.
fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Placement state of an animal
///
/// The Portuguese aliases are accepted so snapshots exported by the old
/// browser tool still import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimalStatus {
    #[default]
    #[serde(rename = "available", alias = "disponivel")]
    Available,
    #[serde(rename = "adopted", alias = "adotado")]
    Adopted,
    #[serde(rename = "in-treatment", alias = "tratamento")]
    InTreatment,
    #[serde(rename = "quarantine", alias = "quarentena")]
    Quarantine,
}

impl AnimalStatus {
    pub const ALL: [AnimalStatus; 4] = [
        AnimalStatus::Available,
        AnimalStatus::Adopted,
        AnimalStatus::InTreatment,
        AnimalStatus::Quarantine,
    ];

    /// Wire/tag value, also used as the CSS class of the status badge
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalStatus::Available => "available",
            AnimalStatus::Adopted => "adopted",
            AnimalStatus::InTreatment => "in-treatment",
            AnimalStatus::Quarantine => "quarantine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnimalStatus::Available => "Available",
            AnimalStatus::Adopted => "Adopted",
            AnimalStatus::InTreatment => "In Treatment",
            AnimalStatus::Quarantine => "Quarantine",
        }
    }
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnimalStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "available" | "disponivel" => Ok(AnimalStatus::Available),
            "adopted" | "adotado" => Ok(AnimalStatus::Adopted),
            "in-treatment" | "tratamento" => Ok(AnimalStatus::InTreatment),
            "quarantine" | "quarentena" => Ok(AnimalStatus::Quarantine),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown animal status: {0:?}")]
pub struct ParseStatusError(pub String);

/// Form contents for registering or editing an animal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalDraft {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub size: String,
    pub health: String,
    pub temperament: String,
    pub description: String,
    pub special_needs: String,
}

impl AnimalDraft {
    pub fn new(name: impl Into<String>, species: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: species.into(),
            ..Self::default()
        }
    }

    /// Pre-fill an edit form from the stored record
    pub fn from_animal(animal: &Animal) -> Self {
        Self {
            name: animal.name.clone(),
            species: animal.species.clone(),
            breed: animal.breed.clone(),
            age: animal.age.clone(),
            gender: animal.gender.clone(),
            size: animal.size.clone(),
            health: animal.health.clone(),
            temperament: animal.temperament.clone(),
            description: animal.description.clone(),
            special_needs: animal.special_needs.clone(),
        }
    }

    /// Required-field check run by the form before add and update
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.name.trim().is_empty() {
            return Err(DraftValidationError::EmptyName);
        }
        if self.species.trim().is_empty() {
            return Err(DraftValidationError::EmptySpecies);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Species cannot be empty")]
    EmptySpecies,
}

/// Status half of a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AnimalStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: AnimalStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Combined list query: a record is visible when it passes both parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalQuery {
    pub status: StatusFilter,
    /// Free text; blank means no text filter
    pub search: String,
}

impl AnimalQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    pub fn status(status: StatusFilter) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

/// Aggregate counts over the whole collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub available: usize,
    pub adopted: usize,
    pub in_treatment: usize,
    pub quarantine: usize,
}

impl Statistics {
    pub fn count_for(&self, status: AnimalStatus) -> usize {
        match status {
            AnimalStatus::Available => self.available,
            AnimalStatus::Adopted => self.adopted,
            AnimalStatus::InTreatment => self.in_treatment,
            AnimalStatus::Quarantine => self.quarantine,
        }
    }
}

/// Display-ready data for one card in the animal grid
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalCard {
    pub id: String,
    pub image_src: String,
    pub status: AnimalStatus,
    pub status_label: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub size: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Single-record detail view
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalDetail {
    pub id: String,
    pub fields: Vec<DetailField>,
}

impl AnimalDetail {
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }
}

impl fmt::Display for AnimalDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            writeln!(f, "{}: {}", field.label, field.value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// Transient user-facing message produced by a store operation
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Result of a mutation that touched one record
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalResponse {
    pub animal: Animal,
    pub notification: Notification,
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt; nothing changed
    Declined,
    /// Confirmed, but no record had that id; nothing changed
    NotFound,
    Deleted {
        animal: Animal,
        notification: Notification,
    },
}

impl DeleteOutcome {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            DeleteOutcome::Deleted { notification, .. } => Some(notification),
            DeleteOutcome::Declined | DeleteOutcome::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportResponse {
    pub imported_count: usize,
    pub notification: Notification,
}

/// Downloadable snapshot of the whole collection
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_current_and_legacy_tags() {
        assert_eq!("available".parse::<AnimalStatus>(), Ok(AnimalStatus::Available));
        assert_eq!("in-treatment".parse::<AnimalStatus>(), Ok(AnimalStatus::InTreatment));
        assert_eq!("quarentena".parse::<AnimalStatus>(), Ok(AnimalStatus::Quarantine));
        assert_eq!(
            "sleeping".parse::<AnimalStatus>(),
            Err(ParseStatusError("sleeping".to_string()))
        );
    }

    #[test]
    fn test_status_filter_from_tag() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "adopted".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(AnimalStatus::Adopted))
        );
        assert!("".parse::<StatusFilter>().is_err());
        assert!(StatusFilter::All.matches(AnimalStatus::Quarantine));
        assert!(!StatusFilter::Only(AnimalStatus::Adopted).matches(AnimalStatus::Available));
    }

    #[test]
    fn test_legacy_record_deserializes() {
        let json = r#"{
            "id": "1717171717171",
            "name": "Rex",
            "species": "dog",
            "breed": null,
            "age": "3",
            "status": "adotado",
            "registrationDate": "2024-05-31T16:08:37.171Z",
            "photos": []
        }"#;

        let animal: Animal = serde_json::from_str(json).expect("legacy record should parse");
        assert_eq!(animal.id, "1717171717171");
        assert_eq!(animal.breed, "");
        assert_eq!(animal.description, "");
        assert_eq!(animal.status, AnimalStatus::Adopted);
    }

    #[test]
    fn test_status_serializes_with_current_tags() {
        let json = serde_json::to_string(&AnimalStatus::InTreatment).unwrap();
        assert_eq!(json, "\"in-treatment\"");
    }

    #[test]
    fn test_draft_validation() {
        assert!(AnimalDraft::new("Rex", "Dog").validate().is_ok());
        assert_eq!(
            AnimalDraft::new("  ", "Dog").validate(),
            Err(DraftValidationError::EmptyName)
        );
        assert_eq!(
            AnimalDraft::new("Rex", "").validate(),
            Err(DraftValidationError::EmptySpecies)
        );
    }
}
