//! Consultant view of one certificate request, routed through the workflow gate.

use contracts::domain::a004_energieausweis::AusweisAnfrage;
use contracts::domain::a006_haushaltsdaten::Haushaltsdaten;
use contracts::enums::UserRole;
use contracts::shared::workflow::HouseholdDataState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use crate::domain::a004_energieausweis::api;
use crate::domain::a004_energieausweis::ui::form::EnergieausweisFormView;
use crate::domain::a004_energieausweis::ui::summary::AnfrageSummary;
use crate::domain::a005_effizienzmassnahme::ui::form::MassnahmenFormView;
use crate::domain::a006_haushaltsdaten::api as haushalt_api;
use crate::domain::a006_haushaltsdaten::ui::summary::HaushaltsdatenSummary;
use crate::routes::{parse_id, AppRoute};
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_stepper::StatusStepper;
use crate::shared::modal::FailureModal;
use crate::shared::submit::handle_auth_error;
use crate::shared::workflow_gate::{GateForms, WorkflowGate};
use crate::system::auth::context::use_auth;

#[derive(Clone)]
struct Loaded {
    anfrage: AusweisAnfrage,
    household: HouseholdDataState,
    daten: Option<Haushaltsdaten>,
}

#[component]
pub fn AnfrageDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let loaded: RwSignal<Option<Loaded>> = RwSignal::new(None);
    let error = RwSignal::new(None::<String>);
    let failure = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);

    let load = move |anfrage_id: i64| {
        set_loading.set(true);
        error.set(None);
        let client = auth.client();
        spawn_local(async move {
            let anfrage = match api::fetch_anfrage(&client, anfrage_id).await {
                Ok(a) => a,
                Err(e) => {
                    if let Some(e) = handle_auth_error(auth, e) {
                        error.set(Some(format!("Anfrage konnte nicht geladen werden: {}", e)));
                    }
                    set_loading.set(false);
                    return;
                }
            };

            let result = match haushalt_api::fetch_haushaltsdaten(&client, anfrage.haushalt_id).await {
                Err(e) if e.is_authentication() => {
                    handle_auth_error(auth, e);
                    set_loading.set(false);
                    return;
                }
                other => other,
            };
            let household = HouseholdDataState::from_result(&result);
            if let (HouseholdDataState::Failed, Err(e)) = (household, &result) {
                log::warn!("household data of {} failed: {}", anfrage.haushalt_id, e);
                failure.set(Some(e.to_string()));
            }

            loaded.set(Some(Loaded {
                anfrage,
                household,
                daten: result.ok(),
            }));
            set_loading.set(false);
        });
    };

    let anfrage_id = params.with_untracked(|p| parse_id(p.get("id")));

    Effect::new(move |_| match parse_id(params.read().get("id")) {
        Some(id) => load(id),
        None => error.set(Some("Ungültige Anfragenummer".to_string())),
    });

    let status = Signal::derive(move || {
        loaded
            .with(|l| l.as_ref().map(|l| l.anfrage.prozess_status.clone()))
            .unwrap_or_default()
    });

    let gate = move || {
        loaded.get().map(|Loaded { anfrage, household, daten }| {
            let id = anfrage.anfrage_id;
            let status = anfrage.prozess_status.clone();
            let summary = ViewFn::from(move || {
                view! {
                    <AnfrageSummary anfrage=anfrage.clone() />
                    <HaushaltsdatenSummary daten=daten.clone() />
                }
            });
            let forms = GateForms {
                certificate: Some(ViewFn::from(move || view! { <EnergieausweisFormView anfrage_id=id /> })),
                plan: Some(ViewFn::from(move || view! { <MassnahmenFormView anfrage_id=id /> })),
                ..Default::default()
            };
            view! {
                <WorkflowGate
                    role=UserRole::Energieberater
                    record_id=id
                    status=status
                    household=household
                    summary=summary
                    forms=forms
                    on_changed=Callback::new(move |_| load(id))
                />
            }
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title=anfrage_id
                    .map(|id| format!("Energieausweis-Anfrage #{}", id))
                    .unwrap_or_else(|| "Energieausweis-Anfrage".to_string())
            >
                <A href=AppRoute::EnergieberaterAnfragen.path()>
                    <Button appearance=ButtonAppearance::Secondary>"Zur Übersicht"</Button>
                </A>
            </PageHeader>
            <div class="page__content">
                <ErrorBanner message=error />
                <StatusStepper status=status />
                <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                    {gate}
                </Show>
            </div>
            <FailureModal failure=failure />
        </div>
    }
}
