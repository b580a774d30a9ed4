//! File picking for CSV uploads. The check runs before any request is made.

use contracts::shared::upload::{validate_csv_upload, UploadError};
use leptos::prelude::*;
use web_sys::{File, FormData, HtmlInputElement};

/// Multipart field name expected by the backend
pub const UPLOAD_FIELD: &str = "file";

pub fn check_file(file: Option<&File>) -> Result<(), UploadError> {
    let Some(file) = file else {
        return validate_csv_upload(None, 0.0);
    };
    let mime = file.type_();
    let mime = if mime.is_empty() { "unbekannt".to_string() } else { mime };
    validate_csv_upload(Some(&mime), file.size())
}

pub fn csv_form_data(file: &File) -> Result<FormData, String> {
    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| format!("{:?}", e))?;
    Ok(form)
}

/// File input accepting a single CSV file. An invalid pick clears
/// `selected` and reports the reason in `error`.
#[component]
pub fn CsvFilePicker(
    selected: RwSignal<Option<File>, LocalStorage>,
    error: RwSignal<Option<String>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        match check_file(file.as_ref()) {
            Ok(()) => {
                error.set(None);
                selected.set(file);
            }
            Err(e) => {
                log::debug!("upload refused: {}", e);
                error.set(Some(e.to_string()));
                selected.set(None);
                input.set_value("");
            }
        }
    };

    view! {
        <div class="upload">
            <input
                type="file"
                accept=".csv,text/csv"
                class="upload__input"
                on:change=on_change
                disabled=move || disabled.get()
            />
            {move || selected.with(|f| f.as_ref().map(|f| f.name())).map(|name| view! {
                <span class="upload__file">{name}</span>
            })}
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
