pub mod use_animal_store;
pub mod use_notifications;
