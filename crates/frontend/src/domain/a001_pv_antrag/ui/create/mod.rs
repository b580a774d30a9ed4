use contracts::domain::a001_pv_antrag::CreatePvAntragForm;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a001_pv_antrag::api;
use crate::routes::AppRoute;
use crate::shared::components::field_error::FormField;
use crate::shared::components::page_header::PageHeader;
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

/// New PV application of the household
#[component]
pub fn CreateAntragPage() -> impl IntoView {
    let adresse = RwSignal::new(String::new());
    let wunschleistung = RwSignal::new(String::new());
    let bemerkung = RwSignal::new(String::new());

    let handle = SubmitHandle::new();
    let errors = handle.errors();

    let on_submit = move |_| {
        let form = CreatePvAntragForm {
            adresse: adresse.get_untracked(),
            wunschleistung_kwp: wunschleistung.get_untracked(),
            bemerkung: bemerkung.get_untracked(),
        };
        handle.submit(
            &form,
            Some(AppRoute::HaushaltAntraege),
            move |client, dto| async move { api::create_antrag(&client, &dto).await },
        );
    };

    let busy = Signal::derive(move || handle.is_submitting() || handle.succeeded());

    view! {
        <div class="page">
            <PageHeader title="Neuer PV-Antrag" subtitle="Ihre Anfrage wird an Solarteure in Ihrer Region weitergeleitet">
                <A href=AppRoute::HaushaltAntraege.path()>
                    <Button appearance=ButtonAppearance::Secondary>"Zurück"</Button>
                </A>
            </PageHeader>
            <div class="page__content">
                <div class="card form">
                    <FormField label="Adresse der Anlage *" field="adresse" errors=errors>
                        <Input value=adresse placeholder="Straße, PLZ Ort" disabled=busy />
                    </FormField>
                    <FormField label="Gewünschte Leistung (kWp)" field="wunschleistung_kwp" errors=errors>
                        <Input value=wunschleistung disabled=busy />
                    </FormField>
                    <FormField label="Bemerkung" field="bemerkung" errors=errors>
                        <Textarea value=bemerkung disabled=busy />
                    </FormField>
                    <Show when=move || handle.succeeded()>
                        <div class="alert alert--success">"Antrag wurde gestellt."</div>
                    </Show>
                    <div class="form__actions">
                        <Button appearance=ButtonAppearance::Primary on_click=on_submit disabled=busy>
                            {move || if handle.is_submitting() { "Wird gesendet..." } else { "Antrag stellen" }}
                        </Button>
                    </div>
                </div>
            </div>
            <FailureModal failure=handle.failure() />
        </div>
    }
}
