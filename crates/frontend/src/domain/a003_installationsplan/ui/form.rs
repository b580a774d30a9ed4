use contracts::domain::a003_installationsplan::InstallationsPlanForm;
use contracts::enums::{Montagesystem, Verschattung};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_installationsplan::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::{CodeSelect, DateInput, FormField};
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

#[component]
pub fn InstallationsPlanFormView(anlage_id: i64) -> impl IntoView {
    let defaults = InstallationsPlanForm::default();
    let kabelfuehrung = RwSignal::new(defaults.kabelfuehrung);
    let montagesystem = RwSignal::new(defaults.montagesystem);
    let verschattung = RwSignal::new(defaults.verschattung);
    let wechselrichter_position = RwSignal::new(defaults.wechselrichter_position);
    let installationsdatum = RwSignal::new(defaults.installationsdatum);

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let on_submit = move |_| {
        let form = InstallationsPlanForm {
            kabelfuehrung: kabelfuehrung.get_untracked(),
            montagesystem: montagesystem.get_untracked(),
            verschattung: verschattung.get_untracked(),
            wechselrichter_position: wechselrichter_position.get_untracked(),
            installationsdatum: installationsdatum.get_untracked(),
        };
        handle.submit(
            &form,
            Some(AppRoute::SolarteurAntraege),
            move |client, dto| async move { api::create_plan(&client, anlage_id, &dto).await },
        );
    };

    let busy = Signal::derive(move || handle.is_submitting() || handle.succeeded());

    view! {
        <section class="card workflow-form">
            <h3 class="card__title">"Installationsplan erstellen"</h3>
            <div class="form form--grid">
                <FormField label="Kabelführung *" field="kabelfuehrung" errors=errors>
                    <Textarea value=kabelfuehrung disabled=busy />
                </FormField>
                <FormField label="Montagesystem *" field="montagesystem" errors=errors>
                    <CodeSelect
                        value=montagesystem
                        options=Montagesystem::all().into_iter().map(|m| (m.code(), m.label())).collect()
                    />
                </FormField>
                <FormField label="Verschattungsanalyse *" field="verschattung" errors=errors>
                    <CodeSelect
                        value=verschattung
                        options=Verschattung::all().into_iter().map(|v| (v.code(), v.label())).collect()
                    />
                </FormField>
                <FormField label="Position des Wechselrichters *" field="wechselrichter_position" errors=errors>
                    <Input value=wechselrichter_position disabled=busy />
                </FormField>
                <FormField label="Installationsdatum *" field="installationsdatum" errors=errors>
                    <DateInput value=installationsdatum disabled=busy />
                </FormField>
            </div>
            <Show when=move || handle.succeeded()>
                <div class="alert alert--success">"Installationsplan wurde gespeichert."</div>
            </Show>
            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=on_submit disabled=busy>
                    {move || if handle.is_submitting() { "Wird gespeichert..." } else { "Installationsplan speichern" }}
                </Button>
            </div>
            <FailureModal failure=handle.failure() />
        </section>
    }
}
