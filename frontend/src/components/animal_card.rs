use shared::{AnimalCard, AnimalStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimalCardProps {
    pub card: AnimalCard,
    pub on_view: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_status_change: Callback<(String, AnimalStatus)>,
}

/// Emit `card_id` on `callback` when clicked
fn id_click(callback: &Callback<String>, card_id: &str) -> Callback<MouseEvent> {
    let callback = callback.clone();
    let card_id = card_id.to_string();
    Callback::from(move |_: MouseEvent| callback.emit(card_id.clone()))
}

#[function_component(AnimalCardView)]
pub fn animal_card_view(props: &AnimalCardProps) -> Html {
    let card = &props.card;

    let on_status_change = {
        let on_status_change = props.on_status_change.clone();
        let card_id = card.id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            // Only the four known statuses ever reach the store
            match select.value().parse::<AnimalStatus>() {
                Ok(status) => on_status_change.emit((card_id.clone(), status)),
                Err(err) => log::warn!("Ignoring status change for {}: {}", card_id, err),
            }
        })
    };

    html! {
        <div class="animal-card" data-status={card.status.as_str()}>
            <div class="animal-image">
                <img src={card.image_src.clone()} alt={card.name.clone()} />
                <span class={classes!("status-badge", card.status.as_str())}>{&card.status_label}</span>
            </div>
            <div class="animal-info">
                <h3>{&card.name}</h3>
                <p><strong>{"Species: "}</strong>{&card.species}</p>
                <p><strong>{"Breed: "}</strong>{&card.breed}</p>
                <p><strong>{"Age: "}</strong>{&card.age}</p>
                <p><strong>{"Size: "}</strong>{&card.size}</p>
                <p class="animal-description">{&card.description}</p>
            </div>
            <div class="animal-actions">
                <button class="btn btn-primary" onclick={id_click(&props.on_view, &card.id)}>
                    {"View Details"}
                </button>
                <button class="btn btn-secondary" onclick={id_click(&props.on_edit, &card.id)}>
                    {"Edit"}
                </button>
                <button class="btn btn-danger" onclick={id_click(&props.on_delete, &card.id)}>
                    {"Delete"}
                </button>
                <select class="status-select" onchange={on_status_change}>
                    {for AnimalStatus::ALL.iter().map(|status| html! {
                        <option value={status.as_str()} selected={*status == card.status}>
                            {status.label()}
                        </option>
                    })}
                </select>
            </div>
        </div>
    }
}
