//! Single place that turns a fetched record into the branch a page shows.
//!
//! The gate never fetches to find out what to render. The page passes the
//! status string and the household data outcome it already loaded, plus the
//! views for the form branches it supports. [`resolve_view`] picks exactly
//! one branch; branches the page did not supply fall back to the summary.

use contracts::enums::{ProzessStatus, UserRole};
use contracts::shared::workflow::{resolve_view, HouseholdDataState, WorkflowAction, WorkflowView};
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal::FailureModal;
use crate::shared::submit::SubmitHandle;

/// Form views of the branches a page can render
#[derive(Clone, Default)]
pub struct GateForms {
    pub offer: Option<ViewFn>,
    pub plan: Option<ViewFn>,
    pub certificate: Option<ViewFn>,
    pub acceptance: Option<ViewFn>,
}

impl GateForms {
    fn for_view(&self, view: WorkflowView) -> Option<&ViewFn> {
        match view {
            WorkflowView::OfferForm => self.offer.as_ref(),
            WorkflowView::PlanForm => self.plan.as_ref(),
            WorkflowView::CertificateForm => self.certificate.as_ref(),
            WorkflowView::AcceptanceForm => self.acceptance.as_ref(),
            _ => None,
        }
    }
}

#[component]
pub fn WorkflowGate(
    role: UserRole,
    /// Installation id or certificate request id, depending on the page
    record_id: i64,
    #[prop(into)] status: String,
    household: HouseholdDataState,
    /// Read-only view used for `SummaryOnly`
    summary: ViewFn,
    #[prop(optional)] forms: GateForms,
    /// Called after an in-place action changed the record
    #[prop(optional)]
    on_changed: Option<Callback<()>>,
) -> impl IntoView {
    if ProzessStatus::parse(&status).is_none() {
        log::warn!("unknown process status {:?}, showing summary", status);
    }
    let view = resolve_view(role, &status, household);
    log::debug!(
        "workflow gate: role={} status={} household={:?} -> {:?} (actionable: {})",
        role.code(),
        status,
        household,
        view,
        view.is_actionable(role)
    );

    match view {
        WorkflowView::RequestData => {
            let action = view
                .actions(role)
                .first()
                .copied()
                .unwrap_or(WorkflowAction::RequestHouseholdData);
            view! {
                <RequestDataPanel action=action record_id=record_id on_changed=on_changed />
            }
            .into_any()
        }
        WorkflowView::AwaitingRelease => view! { <AwaitingReleasePanel role=role /> }.into_any(),
        WorkflowView::SummaryOnly => summary.run(),
        form_view => match forms.for_view(form_view) {
            Some(form) => form.run(),
            None => {
                log::debug!("no view supplied for {:?}, showing summary", form_view);
                summary.run()
            }
        },
    }
}

/// The only thing shown while household data is missing
#[component]
fn RequestDataPanel(
    action: WorkflowAction,
    record_id: i64,
    on_changed: Option<Callback<()>>,
) -> impl IntoView {
    let handle = SubmitHandle::new();

    Effect::new(move |_| {
        if handle.succeeded() {
            if let Some(cb) = on_changed {
                cb.run(());
            }
        }
    });

    let request = move |_| {
        let path = action.endpoint(record_id);
        handle.run(None, move |client| async move { client.post_empty(&path).await });
    };

    view! {
        <div class="workflow-panel workflow-panel--request">
            <p>
                "Für diesen Vorgang liegen noch keine Haushaltsdaten vor. "
                "Fordern Sie die Freigabe beim Haushalt an."
            </p>
            <Show
                when=move || !handle.succeeded()
                fallback=|| view! { <div class="alert alert--success">"Anfrage wurde gesendet."</div> }
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=request
                    disabled=Signal::derive(move || handle.is_submitting())
                >
                    {move || if handle.is_submitting() { "Wird gesendet..." } else { action.label() }}
                </Button>
            </Show>
            <FailureModal failure=handle.failure() />
        </div>
    }
}

/// The household itself reads the pending release as a request addressed to it
fn awaiting_release_text(role: UserRole) -> &'static str {
    match role {
        UserRole::Haushalt => {
            "Für diesen Vorgang wurde eine Freigabe Ihrer Haushaltsdaten angefragt. \
             Bitte erteilen Sie die Freigabe unter „Offene Datenfreigaben“."
        }
        _ => {
            "Der Haushalt hat die Datenfreigabe noch nicht erteilt. \
             Sobald sie vorliegt, geht es hier weiter."
        }
    }
}

/// Release requested, household has not answered yet
#[component]
fn AwaitingReleasePanel(role: UserRole) -> impl IntoView {
    view! {
        <div class="workflow-panel workflow-panel--waiting">
            {icon("clock")}
            <div>
                <strong>"Freigabe ausstehend"</strong>
                <p>{awaiting_release_text(role)}</p>
                <Spinner />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_awaiting_release_text_addresses_household_directly() {
        let own = awaiting_release_text(UserRole::Haushalt);
        assert!(own.contains("Ihrer Haushaltsdaten"));
        assert!(!own.contains("Der Haushalt"));
        for role in [UserRole::Solarteur, UserRole::Energieberater, UserRole::Netzbetreiber] {
            assert!(awaiting_release_text(role).starts_with("Der Haushalt"));
        }
    }
}
