//! Read-only views derived from the animal collection.
//!
//! Everything here is a pure function of the records passed in: the filtered
//! list, the aggregate counts, the card data the grid renders and the detail
//! view. Nothing is cached; callers recompute after every mutation.
//!
//! Status filter and text search are two predicates of one `AnimalQuery`, so
//! the visible set is always their intersection.

use shared::{Animal, AnimalCard, AnimalDetail, AnimalQuery, AnimalStatus, DetailField, Statistics};

pub const NOT_INFORMED: &str = "Not informed";
pub const NO_DESCRIPTION: &str = "No description";
pub const NO_SPECIAL_NEEDS: &str = "None";

/// Case-insensitive substring match on name, species, breed and description.
/// `needle` must already be trimmed and lowercased; an empty needle matches.
pub fn matches_search(animal: &Animal, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [&animal.name, &animal.species, &animal.breed, &animal.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Status and search predicates together. `query.search` must already be normalized.
pub fn matches_query(animal: &Animal, query: &AnimalQuery) -> bool {
    query.status.matches(animal.status) && matches_search(animal, &query.search)
}

pub fn normalize_search(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Records visible under `query`, in insertion order
pub fn filter<'a>(animals: &'a [Animal], query: &AnimalQuery) -> Vec<&'a Animal> {
    let query = AnimalQuery {
        status: query.status,
        search: normalize_search(&query.search),
    };
    animals
        .iter()
        .filter(|animal| matches_query(animal, &query))
        .collect()
}

/// Full-scan counts; `total` always equals the sum of the per-status counts
pub fn statistics(animals: &[Animal]) -> Statistics {
    animals.iter().fold(
        Statistics {
            total: animals.len(),
            ..Statistics::default()
        },
        |mut stats, animal| {
            match animal.status {
                AnimalStatus::Available => stats.available += 1,
                AnimalStatus::Adopted => stats.adopted += 1,
                AnimalStatus::InTreatment => stats.in_treatment += 1,
                AnimalStatus::Quarantine => stats.quarantine += 1,
            }
            stats
        },
    )
}

pub fn card(animal: &Animal, placeholder_image: &str) -> AnimalCard {
    AnimalCard {
        id: animal.id.clone(),
        image_src: animal
            .photos
            .first()
            .filter(|photo| !photo.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| placeholder_image.to_string()),
        status: animal.status,
        status_label: animal.status.label().to_string(),
        name: animal.name.clone(),
        species: animal.species.clone(),
        breed: or_placeholder(&animal.breed, NOT_INFORMED),
        age: animal.age.clone(),
        size: animal.size.clone(),
        description: or_placeholder(&animal.description, NO_DESCRIPTION),
    }
}

pub fn detail(animal: &Animal) -> AnimalDetail {
    let field = |label: &'static str, value: String| DetailField { label, value };

    AnimalDetail {
        id: animal.id.clone(),
        fields: vec![
            field("Name", animal.name.clone()),
            field("Species", animal.species.clone()),
            field("Breed", or_placeholder(&animal.breed, NOT_INFORMED)),
            field("Age", animal.age.clone()),
            field("Gender", animal.gender.clone()),
            field("Size", animal.size.clone()),
            field("Health", animal.health.clone()),
            field("Temperament", animal.temperament.clone()),
            field("Description", or_placeholder(&animal.description, NO_DESCRIPTION)),
            field("Special Needs", or_placeholder(&animal.special_needs, NO_SPECIAL_NEEDS)),
            field("Status", animal.status.label().to_string()),
        ],
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
