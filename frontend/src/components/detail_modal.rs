use shared::AnimalDetail;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub detail: Option<AnimalDetail>,
    pub on_close: Callback<()>,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let Some(detail) = &props.detail else {
        return html! {};
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

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal detail-modal" onclick={on_modal_click}>
                <h3>{"Animal Details"}</h3>
                <dl class="detail-fields">
                    {for detail.fields.iter().map(|field| html! {
                        <>
                            <dt>{field.label}</dt>
                            <dd>{&field.value}</dd>
                        </>
                    })}
                </dl>
                <div class="modal-buttons">
                    <button type="button" class="btn btn-secondary" onclick={on_close_click}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
