use contracts::domain::a001_pv_antrag::AbnahmeForm;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_pv_antrag::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::{DateInput, FormField};
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

/// Sign-off of an approved installation
#[component]
pub fn AbnahmeFormView(anlage_id: i64) -> impl IntoView {
    let abnahme_datum = RwSignal::new(String::new());
    let zaehlernummer = RwSignal::new(String::new());
    let bemerkung = RwSignal::new(String::new());

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let on_submit = move |_| {
        let form = AbnahmeForm {
            abnahme_datum: abnahme_datum.get_untracked(),
            zaehlernummer: zaehlernummer.get_untracked(),
            bemerkung: bemerkung.get_untracked(),
        };
        handle.submit(
            &form,
            Some(AppRoute::NetzbetreiberAntraege),
            move |client, dto| async move { api::abnahme(&client, anlage_id, &dto).await },
        );
    };

    let busy = Signal::derive(move || handle.is_submitting() || handle.succeeded());

    view! {
        <section class="card workflow-form">
            <h3 class="card__title">"Abnahme"</h3>
            <div class="form form--grid">
                <FormField label="Abnahmedatum *" field="abnahme_datum" errors=errors>
                    <DateInput value=abnahme_datum disabled=busy />
                </FormField>
                <FormField label="Zählernummer *" field="zaehlernummer" errors=errors>
                    <Input value=zaehlernummer disabled=busy />
                </FormField>
                <FormField label="Bemerkung" field="bemerkung" errors=errors>
                    <Textarea value=bemerkung disabled=busy />
                </FormField>
            </div>
            <Show when=move || handle.succeeded()>
                <div class="alert alert--success">"Abnahme wurde bestätigt."</div>
            </Show>
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_submit disabled=busy>
                    {move || if handle.is_submitting() { "Wird gesendet..." } else { "Abnahme bestätigen" }}
                </Button>
            </div>
            <FailureModal failure=handle.failure() />
        </section>
    }
}
