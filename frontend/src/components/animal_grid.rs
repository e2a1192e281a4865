use shared::{AnimalCard, AnimalStatus};
use yew::prelude::*;

use super::animal_card::AnimalCardView;

#[derive(Properties, PartialEq)]
pub struct AnimalGridProps {
    pub cards: Vec<AnimalCard>,
    pub on_view: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
    pub on_status_change: Callback<(String, AnimalStatus)>,
}

#[function_component(AnimalGrid)]
pub fn animal_grid(props: &AnimalGridProps) -> Html {
    if props.cards.is_empty() {
        return html! {
            <div id="animalsGrid" class="animals-grid">
                <div class="no-animals">
                    <p>{"No animals found"}</p>
                </div>
            </div>
        };
    }

    html! {
        <div id="animalsGrid" class="animals-grid">
            {for props.cards.iter().map(|card| html! {
                <AnimalCardView
                    key={card.id.clone()}
                    card={card.clone()}
                    on_view={props.on_view.clone()}
                    on_edit={props.on_edit.clone()}
                    on_delete={props.on_delete.clone()}
                    on_status_change={props.on_status_change.clone()}
                />
            })}
        </div>
    }
}
