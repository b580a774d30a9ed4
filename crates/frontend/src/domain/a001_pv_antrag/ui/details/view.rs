use contracts::domain::a001_pv_antrag::PvAntrag;
use contracts::enums::UserRole;
use contracts::shared::workflow::HouseholdDataState;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::abnahme::AbnahmeFormView;
use super::genehmigung::GenehmigungPanel;
use super::view_model::AntragDetailsViewModel;
use crate::domain::a001_pv_antrag::ui::summary::AntragSummary;
use crate::domain::a002_angebot::ui::form::AngebotFormView;
use crate::domain::a002_angebot::ui::list::AngebotListe;
use crate::domain::a003_installationsplan::ui::form::InstallationsPlanFormView;
use crate::domain::a003_installationsplan::ui::summary::InstallationsPlanSummary;
use crate::domain::a006_haushaltsdaten::ui::freigaben::FreigabenPanel;
use crate::routes::{parse_id, AppRoute};
use crate::shared::components::loading::{ErrorBanner, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_stepper::StatusStepper;
use crate::shared::modal::FailureModal;
use crate::shared::workflow_gate::{GateForms, WorkflowGate};

/// Frame shared by the three role pages: id parsing, loading, errors,
/// stepper. `body` renders once application and household state are known.
#[component]
fn AntragDetailFrame<F>(role: UserRole, body: F) -> impl IntoView
where
    F: Fn(AntragDetailsViewModel, PvAntrag, HouseholdDataState) -> AnyView + Send + Sync + 'static,
{
    let params = use_params_map();
    let vm = AntragDetailsViewModel::new();
    let body = StoredValue::new(body);

    Effect::new(move |_| {
        match parse_id(params.read().get("id")) {
            Some(id) => vm.load(id),
            None => vm.error.set(Some("Ungültige Antragsnummer".to_string())),
        }
    });

    let title = params
        .with_untracked(|p| parse_id(p.get("id")))
        .map(|id| format!("PV-Antrag #{}", id))
        .unwrap_or_else(|| "PV-Antrag".to_string());
    let status = Signal::derive(move || {
        vm.antrag
            .with(|a| a.as_ref().map(|a| a.prozess_status.clone()))
            .unwrap_or_default()
    });
    let subtitle = Signal::derive(move || {
        vm.antrag
            .with(|a| a.as_ref().and_then(|a| a.adresse.clone()))
    });

    view! {
        <div class="page">
            <PageHeader title=title subtitle=subtitle>
                <A href=AppRoute::antraege_for(role).path()>
                    <Button appearance=ButtonAppearance::Secondary>"Zur Übersicht"</Button>
                </A>
            </PageHeader>
            <div class="page__content">
                <ErrorBanner message=vm.error />
                <StatusStepper status=status />
                <Show when=move || !vm.loading.get() fallback=|| view! { <Loading /> }>
                    {move || match (vm.antrag.get(), vm.household.get()) {
                        (Some(antrag), Some(household)) => {
                            Some(body.with_value(|render| render(vm, antrag, household)))
                        }
                        _ => None,
                    }}
                </Show>
            </div>
            <FailureModal failure=vm.failure />
        </div>
    }
}

fn summary_view(vm: AntragDetailsViewModel, antrag: PvAntrag) -> ViewFn {
    let daten = vm.haushaltsdaten.get_untracked();
    ViewFn::from(move || {
        view! {
            <AntragSummary antrag=antrag.clone() daten=daten.clone() />
            <InstallationsPlanSummary anlage_id=antrag.anlage_id />
        }
    })
}

#[component]
pub fn HaushaltAntragPage() -> impl IntoView {
    view! {
        <AntragDetailFrame
            role=UserRole::Haushalt
            body=|vm: AntragDetailsViewModel, antrag: PvAntrag, household: HouseholdDataState| {
                let anlage_id = antrag.anlage_id;
                let haushalt_id = antrag.haushalt_id;
                let can_accept = antrag.prozess_status == "AngebotGemacht";
                let status = antrag.prozess_status.clone();
                view! {
                    <WorkflowGate
                        role=UserRole::Haushalt
                        record_id=anlage_id
                        status=status
                        household=household
                        summary=summary_view(vm, antrag)
                    />
                    <AngebotListe
                        anlage_id=anlage_id
                        can_accept=can_accept
                        on_changed=Callback::new(move |_| vm.reload())
                    />
                    <FreigabenPanel haushalt_id=haushalt_id />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn SolarteurAntragPage() -> impl IntoView {
    view! {
        <AntragDetailFrame
            role=UserRole::Solarteur
            body=|vm: AntragDetailsViewModel, antrag: PvAntrag, household: HouseholdDataState| {
                let anlage_id = antrag.anlage_id;
                let status = antrag.prozess_status.clone();
                let forms = GateForms {
                    offer: Some(ViewFn::from(move || view! { <AngebotFormView anlage_id=anlage_id /> })),
                    plan: Some(ViewFn::from(move || {
                        view! { <InstallationsPlanFormView anlage_id=anlage_id /> }
                    })),
                    ..Default::default()
                };
                view! {
                    <WorkflowGate
                        role=UserRole::Solarteur
                        record_id=anlage_id
                        status=status
                        household=household
                        summary=summary_view(vm, antrag)
                        forms=forms
                        on_changed=Callback::new(move |_| vm.reload())
                    />
                    <AngebotListe anlage_id=anlage_id />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn NetzbetreiberAntragPage() -> impl IntoView {
    view! {
        <AntragDetailFrame
            role=UserRole::Netzbetreiber
            body=|vm: AntragDetailsViewModel, antrag: PvAntrag, household: HouseholdDataState| {
                let anlage_id = antrag.anlage_id;
                let status = antrag.prozess_status.clone();
                let awaits_approval = antrag.status().is_some_and(|s| s.awaits_grid_approval());
                let forms = GateForms {
                    acceptance: Some(ViewFn::from(move || view! { <AbnahmeFormView anlage_id=anlage_id /> })),
                    ..Default::default()
                };
                view! {
                    <WorkflowGate
                        role=UserRole::Netzbetreiber
                        record_id=anlage_id
                        status=status
                        household=household
                        summary=summary_view(vm, antrag)
                        forms=forms
                    />
                    {awaits_approval.then(|| view! { <GenehmigungPanel anlage_id=anlage_id /> })}
                }
                .into_any()
            }
        />
    }
}
