//! Blob download plumbing for generated report files.

use mpa_core::export::{export_filename, ExportKind};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::api;

/// Hand a byte buffer to the browser as a named download.
///
/// Creates an object URL for a one-element blob, clicks a hidden anchor at
/// it, then revokes the URL.
pub fn save_file(bytes: &[u8], mime: &str, filename: &str) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());

    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|_| "Failed to create blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create download".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "Unable to create anchor")?
        .dyn_into()
        .map_err(|_| "Anchor cast failed")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();

    document
        .body()
        .ok_or("Missing body")?
        .append_child(&anchor)
        .ok();
    anchor.click();
    anchor.remove();
    Url::revoke_object_url(&url).ok();

    Ok(())
}

/// Fetch an export from the backend and save it under the dashboard's
/// file naming rule.
///
/// `payload` must be the verbatim analysis response; the backend rebuilds
/// the file from whatever fields it put there, including ones this client
/// never renders.
pub async fn download_report(
    kind: ExportKind,
    mpa_name: &str,
    payload: &serde_json::Value,
) -> Result<(), String> {
    let bytes = api::export_report(kind, payload)
        .await
        .map_err(|e| e.to_string())?;
    let today = chrono::Local::now().date_naive();
    let filename = export_filename(mpa_name, kind, today);
    log::info!("saving export: {filename} ({} bytes)", bytes.len());
    save_file(&bytes, kind.mime(), &filename)
}
