use contracts::domain::a001_pv_antrag::GenehmigungForm;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_pv_antrag::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::FormField;
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

/// Grid approval; the NVP check must be confirmed first
#[component]
pub fn GenehmigungPanel(anlage_id: i64) -> impl IntoView {
    let nvp_pruefung = RwSignal::new(false);
    let bemerkung = RwSignal::new(String::new());

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let on_submit = move |_| {
        let form = GenehmigungForm {
            nvp_pruefung: nvp_pruefung.get_untracked(),
            bemerkung: bemerkung.get_untracked(),
        };
        handle.submit(
            &form,
            Some(AppRoute::NetzbetreiberAntraege),
            move |client, dto| async move { api::genehmigen(&client, anlage_id, &dto).await },
        );
    };

    let busy = Signal::derive(move || handle.is_submitting() || handle.succeeded());

    view! {
        <section class="card workflow-form">
            <h3 class="card__title">"Netzverträglichkeit und Genehmigung"</h3>
            <FormField label="Netzverträglichkeitsprüfung" field="nvp_pruefung" errors=errors>
                <Checkbox checked=nvp_pruefung label="Die Netzverträglichkeitsprüfung wurde durchgeführt" />
            </FormField>
            <FormField label="Bemerkung" field="bemerkung" errors=errors>
                <Textarea value=bemerkung disabled=busy />
            </FormField>
            <Show when=move || handle.succeeded()>
                <div class="alert alert--success">"Antrag wurde genehmigt."</div>
            </Show>
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_submit disabled=busy>
                    {move || if handle.is_submitting() { "Wird gesendet..." } else { "Genehmigen" }}
                </Button>
            </div>
            <FailureModal failure=handle.failure() />
        </section>
    }
}
