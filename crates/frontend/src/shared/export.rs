//! CSV download of table data.
//!
//! The text is produced by `contracts::shared::csv_export::to_csv`; this
//! module only turns it into a browser download.

use contracts::shared::csv_export::{export_file_name, to_csv};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Serialize `records` and let the browser save them as `<prefix>_<date>.csv`
pub fn export_csv<T: Serialize>(records: &[T], prefix: &str) -> Result<(), String> {
    let csv = to_csv(records).map_err(|e| e.to_string())?;
    let filename = export_file_name(prefix, chrono::Local::now().date_naive());
    log::debug!("exporting {} records to {}", records.len(), filename);

    // BOM so spreadsheet programs detect UTF-8 (umlauts)
    let mut content = String::with_capacity(csv.len() + 3);
    content.push('\u{FEFF}');
    content.push_str(&csv);

    let blob = create_csv_blob(&content)?;
    download_blob(&blob, &filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Blob konnte nicht erzeugt werden: {:?}", e))
}

/// Click a temporary anchor pointing at an object URL
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("Kein window-Objekt")?;
    let document = window.document().ok_or("Kein document-Objekt")?;
    let body = document.body().ok_or("Kein body-Element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Objekt-URL fehlgeschlagen: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Link konnte nicht erzeugt werden: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Kein Anker-Element: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("{:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("{:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("{:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("{:?}", e))?;
    Ok(())
}
