use anyhow::{anyhow, Result};
use gloo::file::{Blob, ObjectUrl};
use gloo::timers::callback::Timeout;
use shared::ExportFile;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

const URL_REVOKE_DELAY_MS: u32 = 60_000;

/// Offer `file` to the user as a browser download
pub fn download_export(file: &ExportFile) -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("No document available"))?;

    let blob = Blob::new_with_options(file.content.as_str(), Some("application/json"));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("Failed to create download link: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("Download link is not an anchor element"))?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();

    // The browser may still be reading the blob after click() returns;
    // dropping the ObjectUrl revokes it
    Timeout::new(URL_REVOKE_DELAY_MS, move || drop(url)).forget();

    Ok(())
}
