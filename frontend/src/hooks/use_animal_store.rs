use std::cell::RefCell;
use std::rc::Rc;

use shared::{
    AnimalCard, AnimalDetail, AnimalDraft, AnimalQuery, AnimalStatus, Notification, Statistics,
    StatusFilter,
};
use shelter_backend::{AnimalService, ShelterConfig};
use yew::prelude::*;

use crate::services::download::download_export;
use crate::services::local_storage::LocalStorageStore;

pub type StoreHandle = Rc<RefCell<AnimalService<LocalStorageStore>>>;

#[derive(Clone, PartialEq)]
pub struct AnimalStoreState {
    pub cards: Vec<AnimalCard>,
    pub statistics: Statistics,
    pub query: AnimalQuery,
}

#[derive(Clone, PartialEq)]
pub struct AnimalStoreActions {
    pub add: Callback<AnimalDraft>,
    pub update: Callback<(String, AnimalDraft)>,
    pub delete: Callback<String>,
    pub set_status: Callback<(String, AnimalStatus)>,
    pub import: Callback<String>,
    pub export: Callback<()>,
    pub set_search: Callback<String>,
    pub set_status_filter: Callback<StatusFilter>,
}

pub struct UseAnimalStoreResult {
    pub state: AnimalStoreState,
    pub actions: AnimalStoreActions,
    store: StoreHandle,
}

impl UseAnimalStoreResult {
    /// Form contents for editing an animal, looked up by id when called
    pub fn draft_lookup(&self) -> impl Fn(&str) -> Option<AnimalDraft> + 'static {
        let store = self.store.clone();
        move |animal_id| store.borrow().get(animal_id).map(AnimalDraft::from_animal)
    }

    pub fn detail_lookup(&self) -> impl Fn(&str) -> Option<AnimalDetail> + 'static {
        let store = self.store.clone();
        move |animal_id| store.borrow().detail(animal_id)
    }
}

/// Show the outcome of a store call and re-render from the store
fn report(
    result: anyhow::Result<Option<Notification>>,
    notify: &Callback<Notification>,
    refresh: &UseForceUpdateHandle,
) {
    match result {
        Ok(Some(notification)) => notify.emit(notification),
        Ok(None) => {}
        Err(e) => {
            log::error!("{:#}", e);
            notify.emit(Notification::error(format!("{:#}", e)));
        }
    }
    refresh.force_update();
}

/// Owns the one `AnimalService` of the page. Every view is recomputed from it
/// on each render.
#[hook]
pub fn use_animal_store(config: &ShelterConfig, notify: Callback<Notification>) -> UseAnimalStoreResult {
    let store: StoreHandle = {
        let config = config.clone();
        use_mut_ref(move || AnimalService::load(LocalStorageStore, config))
    };
    let query = use_state(AnimalQuery::default);
    let refresh = use_force_update();

    let add = {
        let store = store.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |draft: AnimalDraft| {
            let result = store.borrow_mut().add(draft).map(|response| Some(response.notification));
            report(result, &notify, &refresh);
        })
    };

    let update = {
        let store = store.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |(animal_id, draft): (String, AnimalDraft)| {
            let result = store
                .borrow_mut()
                .update(&animal_id, draft)
                .map(|response| response.map(|response| response.notification));
            report(result, &notify, &refresh);
        })
    };

    let delete = {
        let store = store.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |animal_id: String| {
            let confirm = |prompt: &str| gloo::dialogs::confirm(prompt);
            let result = store
                .borrow_mut()
                .delete(&animal_id, &confirm)
                .map(|outcome| outcome.notification().cloned());
            report(result, &notify, &refresh);
        })
    };

    let set_status = {
        let store = store.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |(animal_id, status): (String, AnimalStatus)| {
            let result = store
                .borrow_mut()
                .set_status(&animal_id, status)
                .map(|response| response.map(|response| response.notification));
            report(result, &notify, &refresh);
        })
    };

    let import = {
        let store = store.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |blob: String| {
            let result = store.borrow_mut().import(&blob).map(|response| Some(response.notification));
            report(result, &notify, &refresh);
        })
    };

    let export = {
        let store = store.clone();
        let notify = notify.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let result = store
                .borrow()
                .export()
                .and_then(|file| download_export(&file))
                .map(|()| None);
            report(result, &notify, &refresh);
        })
    };

    let set_search = {
        let query = query.clone();
        Callback::from(move |search: String| {
            query.set(AnimalQuery {
                search,
                status: query.status,
            });
        })
    };

    let set_status_filter = {
        let query = query.clone();
        Callback::from(move |status: StatusFilter| {
            query.set(AnimalQuery {
                status,
                search: query.search.clone(),
            });
        })
    };

    let state = {
        let service = store.borrow();
        AnimalStoreState {
            cards: service.cards(&query),
            statistics: service.statistics(),
            query: (*query).clone(),
        }
    };

    UseAnimalStoreResult {
        state,
        actions: AnimalStoreActions {
            add,
            update,
            delete,
            set_status,
            import,
            export,
            set_search,
            set_status_filter,
        },
        store,
    }
}
