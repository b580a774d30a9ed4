use contracts::domain::a009_smart_meter::UploadResult;
use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use thaw::*;
use web_sys::File;

use crate::domain::a009_smart_meter::api;
use crate::shared::icons::icon;
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;
use crate::shared::upload::{check_file, csv_form_data, CsvFilePicker};

/// Meter reading import of the signed in user
#[component]
pub fn SmartMeterUpload(user_id: String, on_uploaded: Callback<()>) -> impl IntoView {
    let selected: RwSignal<Option<File>, LocalStorage> = RwSignal::new_local(None);
    let error = RwSignal::new(None::<String>);
    let result: RwSignal<Option<UploadResult>> = RwSignal::new(None);
    let user_id = StoredValue::new(user_id);

    let handle = SubmitHandle::new();

    Effect::new(move |_| {
        if handle.succeeded() {
            selected.set(None);
            handle.reset();
            on_uploaded.run(());
        }
    });

    let on_upload = move |_| {
        let Some(file) = selected.get_untracked() else {
            return;
        };
        if let Err(e) = check_file(Some(&file)) {
            error.set(Some(e.to_string()));
            return;
        }
        let form = match csv_form_data(&file) {
            Ok(form) => form,
            Err(e) => {
                log::warn!("multipart body not built: {}", e);
                error.set(Some("Die Datei konnte nicht gelesen werden".to_string()));
                return;
            }
        };
        result.set(None);
        let user_id = user_id.get_value();
        handle.run(None, move |client| async move {
            let uploaded = api::upload_csv(&client, &user_id, form).await?;
            log::info!("{} meter rows imported", uploaded.importierte_zeilen);
            result.set(Some(uploaded));
            Ok::<_, ApiError>(())
        });
    };

    let busy = Signal::derive(move || handle.is_submitting());

    view! {
        <section class="card">
            <h3 class="card__title">"Zählerstände importieren"</h3>
            <p class="text-muted">"CSV-Export Ihres Messstellenbetreibers, eine Datei pro Import."</p>
            <CsvFilePicker selected=selected error=error disabled=busy />
            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_upload
                    disabled=Signal::derive(move || busy.get() || selected.with(Option::is_none))
                >
                    {icon("upload")}
                    {move || if busy.get() { " Wird hochgeladen..." } else { " Hochladen" }}
                </Button>
            </div>
            {move || result.get().map(|r| view! {
                <div class="alert alert--success">
                    {format!("{} Zeilen importiert.", r.importierte_zeilen)}
                    {(!r.fehler.is_empty()).then(|| view! {
                        <ul class="upload__errors">
                            {r.fehler.iter().map(|f| view! { <li>{f.clone()}</li> }).collect_view()}
                        </ul>
                    })}
                </div>
            })}
            <FailureModal failure=handle.failure() />
        </section>
    }
}
