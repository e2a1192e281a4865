use log::LevelFilter;
use shared::{AnimalDetail, AnimalDraft};
use shelter_backend::ShelterConfig;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::animal_form_modal::AnimalFormModal;
use components::animal_grid::AnimalGrid;
use components::data_tools::DataTools;
use components::detail_modal::DetailModal;
use components::filter_bar::FilterBar;
use components::header::Header;
use components::notification_stack::NotificationStack;
use components::statistics_panel::StatisticsPanel;
use hooks::use_animal_store::use_animal_store;
use hooks::use_notifications::use_notifications;
use services::logging::ConsoleLogger;

const CONFIG_YAML: &str = include_str!("../shelter.yaml");

/// Which record the register/edit form is working on
#[derive(Clone, PartialEq)]
enum FormMode {
    Closed,
    Register,
    Edit(String),
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ShelterConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let notifications = use_notifications(props.config.notification_timeout_ms);
    let store = use_animal_store(&props.config, notifications.notify.clone());

    let form_mode = use_state(|| FormMode::Closed);
    let form_draft = use_state(AnimalDraft::default);
    let detail = use_state(|| Option::<AnimalDetail>::None);

    let on_register = {
        let form_mode = form_mode.clone();
        let form_draft = form_draft.clone();
        Callback::from(move |_: ()| {
            form_draft.set(AnimalDraft::default());
            form_mode.set(FormMode::Register);
        })
    };

    let on_edit = {
        let form_mode = form_mode.clone();
        let form_draft = form_draft.clone();
        let draft_lookup = store.draft_lookup();
        Callback::from(move |animal_id: String| match draft_lookup(&animal_id) {
            Some(draft) => {
                form_draft.set(draft);
                form_mode.set(FormMode::Edit(animal_id));
            }
            None => log::warn!("Edit requested for unknown animal {}", animal_id),
        })
    };

    let on_view = {
        let detail = detail.clone();
        let detail_lookup = store.detail_lookup();
        Callback::from(move |animal_id: String| match detail_lookup(&animal_id) {
            Some(found) => detail.set(Some(found)),
            None => log::warn!("Details requested for unknown animal {}", animal_id),
        })
    };

    let on_form_close = {
        let form_mode = form_mode.clone();
        Callback::from(move |_: ()| form_mode.set(FormMode::Closed))
    };

    let on_form_submit = {
        let form_mode = form_mode.clone();
        let add = store.actions.add.clone();
        let update = store.actions.update.clone();
        Callback::from(move |draft: AnimalDraft| {
            match &*form_mode {
                FormMode::Register => add.emit(draft),
                FormMode::Edit(animal_id) => update.emit((animal_id.clone(), draft)),
                FormMode::Closed => return,
            }
            form_mode.set(FormMode::Closed);
        })
    };

    let on_detail_close = {
        let detail = detail.clone();
        Callback::from(move |_: ()| detail.set(None))
    };

    html! {
        <div class="app">
            <Header on_register={on_register} />

            <main class="container">
                <StatisticsPanel statistics={store.state.statistics} />

                <div class="toolbar">
                    <FilterBar
                        active={store.state.query.status}
                        search={store.state.query.search.clone()}
                        on_filter={store.actions.set_status_filter.clone()}
                        on_search={store.actions.set_search.clone()}
                    />
                    <DataTools
                        on_export={store.actions.export.clone()}
                        on_import={store.actions.import.clone()}
                        on_error={notifications.notify.clone()}
                    />
                </div>

                <AnimalGrid
                    cards={store.state.cards.clone()}
                    on_view={on_view}
                    on_edit={on_edit}
                    on_delete={store.actions.delete.clone()}
                    on_status_change={store.actions.set_status.clone()}
                />
            </main>

            <AnimalFormModal
                is_open={*form_mode != FormMode::Closed}
                editing={matches!(*form_mode, FormMode::Edit(_))}
                initial={(*form_draft).clone()}
                on_submit={on_form_submit}
                on_close={on_form_close}
            />

            <DetailModal detail={(*detail).clone()} on_close={on_detail_close} />

            <NotificationStack entries={notifications.entries.clone()} />
        </div>
    }
}

/// Embedded settings, or the defaults when the embedded document is unusable
fn load_config() -> ShelterConfig {
    match ShelterConfig::from_yaml(CONFIG_YAML) {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!(format!("Invalid shelter.yaml, using defaults: {}", e));
            ShelterConfig::default()
        }
    }
}

fn main() {
    let config = load_config();

    let level = config.log_level_filter().unwrap_or(LevelFilter::Info);
    if let Err(e) = ConsoleLogger::init(level) {
        gloo::console::error!(format!("Failed to initialize logging: {}", e));
    }

    log::info!("Starting shelter records with storage key '{}'", config.storage_key);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
