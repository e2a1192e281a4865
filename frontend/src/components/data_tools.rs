use std::fmt::Display;

use gloo::file::callbacks::{read_as_text, FileReader};
use gloo::file::File;
use shared::Notification;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DataToolsProps {
    pub on_export: Callback<()>,
    /// Receives the raw text of the chosen file
    pub on_import: Callback<String>,
    pub on_error: Callback<Notification>,
}

/// Notification for an import file the browser could not read
fn read_failure(err: &impl Display) -> Notification {
    Notification::error(format!("Error importing data: {}", err))
}

#[function_component(DataTools)]
pub fn data_tools(props: &DataToolsProps) -> Html {
    // The read is cancelled if its FileReader is dropped, so hold on to it
    let reader = use_mut_ref(|| Option::<FileReader>::None);

    let on_export_click = {
        let on_export = props.on_export.clone();
        Callback::from(move |_: MouseEvent| on_export.emit(()))
    };

    let on_file_change = {
        let reader = reader.clone();
        let on_import = props.on_import.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // Allow picking the same file again later
            input.set_value("");

            log::info!("Reading import file {}", file.name());
            let file = File::from(file);
            let on_import = on_import.clone();
            let on_error = on_error.clone();
            let task = read_as_text(&file, move |result| match result {
                Ok(text) => on_import.emit(text),
                Err(err) => {
                    log::error!("Failed to read import file: {}", err);
                    on_error.emit(read_failure(&err));
                }
            });
            *reader.borrow_mut() = Some(task);
        })
    };

    html! {
        <div class="data-tools">
            <button type="button" class="btn btn-secondary" onclick={on_export_click}>
                {"Export Data"}
            </button>
            <label class="btn btn-secondary import-label">
                {"Import Data"}
                <input type="file" accept="application/json,.json" hidden=true onchange={on_file_change} />
            </label>
        </div>
    }
}
