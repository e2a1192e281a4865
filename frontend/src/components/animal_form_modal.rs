use shared::AnimalDraft;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnimalFormModalProps {
    pub is_open: bool,
    /// true when editing an existing animal
    pub editing: bool,
    pub initial: AnimalDraft,
    pub on_submit: Callback<AnimalDraft>,
    pub on_close: Callback<()>,
}

fn input_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn textarea_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Change handler writing one draft field
fn field_setter(
    draft: &UseStateHandle<AnimalDraft>,
    read: fn(&Event) -> String,
    write: fn(&mut AnimalDraft, String),
) -> Callback<Event> {
    let draft = draft.clone();
    Callback::from(move |e: Event| {
        let mut next = (*draft).clone();
        write(&mut next, read(&e));
        draft.set(next);
    })
}

#[function_component(AnimalFormModal)]
pub fn animal_form_modal(props: &AnimalFormModalProps) -> Html {
    let draft = use_state(|| props.initial.clone());
    let error_message = use_state(|| Option::<String>::None);

    // Reset the form whenever it opens or the record being edited changes
    use_effect_with((props.is_open, props.initial.clone()), {
        let draft = draft.clone();
        let error_message = error_message.clone();
        move |(is_open, initial): &(bool, AnimalDraft)| {
            if *is_open {
                draft.set(initial.clone());
                error_message.set(None);
            }
            || ()
        }
    });

    let on_submit = {
        let draft = draft.clone();
        let error_message = error_message.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match draft.validate() {
                Ok(()) => {
                    error_message.set(None);
                    on_submit.emit((*draft).clone());
                }
                Err(err) => error_message.set(Some(err.to_string())),
            }
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    let title = if props.editing { "Edit Animal" } else { "Register Animal" };

    html! {
        <div id="animalModal" class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 id="modalTitle">{title}</h3>
                <form id="animalForm" onsubmit={on_submit}>
                    <label for="animalName">{"Name *"}</label>
                    <input id="animalName" type="text" required=true value={draft.name.clone()}
                        onchange={field_setter(&draft, input_value, |d, v| d.name = v)} />

                    <label for="animalSpecies">{"Species *"}</label>
                    <select id="animalSpecies" required=true
                        onchange={field_setter(&draft, select_value, |d, v| d.species = v)}>
                        <option value="" selected={draft.species.is_empty()}>{"Select..."}</option>
                        {for ["Dog", "Cat", "Other"].iter().map(|species| html! {
                            <option value={*species} selected={draft.species == *species}>{*species}</option>
                        })}
                        {
                            // Keep imported species that are not in the list selectable
                            if !draft.species.is_empty() && !["Dog", "Cat", "Other"].contains(&draft.species.as_str()) {
                                html! { <option value={draft.species.clone()} selected=true>{&draft.species}</option> }
                            } else {
                                html! {}
                            }
                        }
                    </select>

                    <label for="animalBreed">{"Breed"}</label>
                    <input id="animalBreed" type="text" value={draft.breed.clone()}
                        onchange={field_setter(&draft, input_value, |d, v| d.breed = v)} />

                    <label for="animalAge">{"Age"}</label>
                    <input id="animalAge" type="text" value={draft.age.clone()}
                        onchange={field_setter(&draft, input_value, |d, v| d.age = v)} />

                    <label for="animalGender">{"Gender"}</label>
                    <select id="animalGender"
                        onchange={field_setter(&draft, select_value, |d, v| d.gender = v)}>
                        <option value="" selected={draft.gender.is_empty()}>{"Not informed"}</option>
                        <option value="Male" selected={draft.gender == "Male"}>{"Male"}</option>
                        <option value="Female" selected={draft.gender == "Female"}>{"Female"}</option>
                    </select>

                    <label for="animalSize">{"Size"}</label>
                    <select id="animalSize"
                        onchange={field_setter(&draft, select_value, |d, v| d.size = v)}>
                        <option value="" selected={draft.size.is_empty()}>{"Not informed"}</option>
                        <option value="Small" selected={draft.size == "Small"}>{"Small"}</option>
                        <option value="Medium" selected={draft.size == "Medium"}>{"Medium"}</option>
                        <option value="Large" selected={draft.size == "Large"}>{"Large"}</option>
                    </select>

                    <label for="animalHealth">{"Health"}</label>
                    <input id="animalHealth" type="text" value={draft.health.clone()}
                        onchange={field_setter(&draft, input_value, |d, v| d.health = v)} />

                    <label for="animalTemperament">{"Temperament"}</label>
                    <input id="animalTemperament" type="text" value={draft.temperament.clone()}
                        onchange={field_setter(&draft, input_value, |d, v| d.temperament = v)} />

                    <label for="animalDescription">{"Description"}</label>
                    <textarea id="animalDescription" value={draft.description.clone()}
                        onchange={field_setter(&draft, textarea_value, |d, v| d.description = v)} />

                    <label for="animalNeeds">{"Special Needs"}</label>
                    <textarea id="animalNeeds" value={draft.special_needs.clone()}
                        onchange={field_setter(&draft, textarea_value, |d, v| d.special_needs = v)} />

                    {if let Some(error) = &*error_message {
                        html! { <div class="form-error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    <div class="modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {if props.editing { "Save Changes" } else { "Register" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
