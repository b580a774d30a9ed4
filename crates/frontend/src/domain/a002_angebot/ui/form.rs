use contracts::domain::a002_angebot::AngebotForm;
use contracts::enums::Ausrichtung;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_angebot::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::{CodeSelect, FormField};
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

/// Offer form of the installer. Success returns to the application table.
#[component]
pub fn AngebotFormView(anlage_id: i64) -> impl IntoView {
    let defaults = AngebotForm::default();
    let modultyp = RwSignal::new(defaults.modultyp);
    let kapazitaet = RwSignal::new(defaults.kapazitaet);
    let installationsflaeche = RwSignal::new(defaults.installationsflaeche);
    let ausrichtung = RwSignal::new(defaults.ausrichtung);
    let kosten = RwSignal::new(defaults.kosten);

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let on_submit = move |_| {
        let form = AngebotForm {
            modultyp: modultyp.get_untracked(),
            kapazitaet: kapazitaet.get_untracked(),
            installationsflaeche: installationsflaeche.get_untracked(),
            ausrichtung: ausrichtung.get_untracked(),
            kosten: kosten.get_untracked(),
        };
        handle.submit(
            &form,
            Some(AppRoute::SolarteurAntraege),
            move |client, dto| async move { api::create_angebot(&client, anlage_id, &dto).await },
        );
    };

    let busy = Signal::derive(move || handle.is_submitting() || handle.succeeded());

    view! {
        <section class="card workflow-form">
            <h3 class="card__title">"Angebot erstellen"</h3>
            <div class="form form--grid">
                <FormField label="Modultyp *" field="modultyp" errors=errors>
                    <Input value=modultyp placeholder="z.B. Mono 410 Wp" disabled=busy />
                </FormField>
                <FormField label="Kapazität (kWp) *" field="kapazitaet" errors=errors>
                    <Input value=kapazitaet disabled=busy />
                </FormField>
                <FormField label="Installationsfläche (m²) *" field="installationsflaeche" errors=errors>
                    <Input value=installationsflaeche disabled=busy />
                </FormField>
                <FormField label="Ausrichtung *" field="ausrichtung" errors=errors>
                    <CodeSelect
                        value=ausrichtung
                        options=Ausrichtung::all().into_iter().map(|a| (a.code(), a.label())).collect()
                    />
                </FormField>
                <FormField label="Kosten (€) *" field="kosten" errors=errors>
                    <Input value=kosten disabled=busy />
                </FormField>
            </div>
            <Show when=move || handle.succeeded()>
                <div class="alert alert--success">"Angebot wurde gesendet."</div>
            </Show>
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_submit disabled=busy>
                    {move || if handle.is_submitting() { "Wird gesendet..." } else { "Angebot senden" }}
                </Button>
            </div>
            <FailureModal failure=handle.failure() />
        </section>
    }
}
