use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_register: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_click = {
        let on_register = props.on_register.clone();
        Callback::from(move |_: MouseEvent| on_register.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Animal Shelter Records"}</h1>
                <div class="header-right">
                    <button id="addAnimalBtn" class="btn btn-primary" onclick={on_click}>
                        {"+ Register Animal"}
                    </button>
                </div>
            </div>
        </header>
    }
}
