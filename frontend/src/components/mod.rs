pub mod animal_card;
pub mod animal_form_modal;
pub mod animal_grid;
pub mod data_tools;
pub mod detail_modal;
pub mod filter_bar;
pub mod header;
pub mod notification_stack;
pub mod statistics_panel;
