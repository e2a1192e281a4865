use shared::{AnimalStatus, StatusFilter};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub active: StatusFilter,
    pub search: String,
    pub on_filter: Callback<StatusFilter>,
    pub on_search: Callback<String>,
}

/// Status buttons and the search box. Both feed the same query, so the grid
/// shows animals matching the status AND the search text.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_search_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    let filters = std::iter::once(StatusFilter::All)
        .chain(AnimalStatus::ALL.iter().copied().map(StatusFilter::Only));

    html! {
        <div class="filters">
            <div class="filter-buttons">
                {for filters.map(|filter| {
                    let on_click = {
                        let on_filter = props.on_filter.clone();
                        Callback::from(move |_: MouseEvent| on_filter.emit(filter))
                    };
                    let label = match filter {
                        StatusFilter::All => "All",
                        StatusFilter::Only(status) => status.label(),
                    };
                    html! {
                        <button
                            class={classes!("filter-btn", (filter == props.active).then_some("active"))}
                            data-filter={filter.as_tag()}
                            onclick={on_click}
                        >
                            {label}
                        </button>
                    }
                })}
            </div>
            <input
                id="searchInput"
                type="search"
                placeholder="Search by name, species, breed or description"
                value={props.search.clone()}
                oninput={on_search_input}
            />
        </div>
    }
}
