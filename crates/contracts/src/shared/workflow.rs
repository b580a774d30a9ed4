//! Workflow view resolver.
//!
//! Every page that shows a single application or certificate request asks
//! [`resolve_view`] which of the mutually exclusive branches to render. The
//! decision only uses data that was already fetched: the status string of
//! the record and the outcome of the household data request.

use serde::{Deserialize, Serialize};

use super::api_error::{ApiError, Precondition};
use super::endpoints;
use crate::enums::{ProzessStatus, UserRole};

/// Outcome of `GET /api/haushalte/{id}/daten`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseholdDataState {
    Available,
    /// 404
    Missing,
    /// 412
    ReleasePending,
    /// any other error
    Failed,
}

impl HouseholdDataState {
    pub fn from_result<T>(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => HouseholdDataState::Available,
            Err(ApiError::Precondition(Precondition::MissingData)) => HouseholdDataState::Missing,
            Err(ApiError::Precondition(Precondition::ReleasePending)) => {
                HouseholdDataState::ReleasePending
            }
            Err(_) => HouseholdDataState::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowView {
    RequestData,
    AwaitingRelease,
    SummaryOnly,
    OfferForm,
    PlanForm,
    CertificateForm,
    AcceptanceForm,
}

/// Mutation reachable from a workflow view. Each is a POST to one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowAction {
    RequestHouseholdData,
    RequestCertificateData,
    SubmitOffer,
    SubmitInstallationPlan,
    SubmitEfficiencyMeasures,
    SubmitCertificate,
    SubmitAcceptance,
}

impl WorkflowAction {
    /// `record_id` is the installation id for PV actions and the request id
    /// for certificate actions.
    pub fn endpoint(&self, record_id: i64) -> String {
        match self {
            WorkflowAction::RequestHouseholdData => endpoints::daten_anfordern(record_id),
            WorkflowAction::RequestCertificateData => {
                endpoints::ausweis_daten_anfordern(record_id)
            }
            WorkflowAction::SubmitOffer => endpoints::angebote(record_id),
            WorkflowAction::SubmitInstallationPlan => endpoints::installationsplan(record_id),
            WorkflowAction::SubmitEfficiencyMeasures => endpoints::massnahmen(record_id),
            WorkflowAction::SubmitCertificate => endpoints::energieausweis(record_id),
            WorkflowAction::SubmitAcceptance => endpoints::abnahme(record_id),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkflowAction::RequestHouseholdData | WorkflowAction::RequestCertificateData => {
                "Haushaltsdaten anfordern"
            }
            WorkflowAction::SubmitOffer => "Angebot senden",
            WorkflowAction::SubmitInstallationPlan => "Installationsplan speichern",
            WorkflowAction::SubmitEfficiencyMeasures => "Maßnahmen speichern",
            WorkflowAction::SubmitCertificate => "Energieausweis erstellen",
            WorkflowAction::SubmitAcceptance => "Abnahme bestätigen",
        }
    }
}

impl WorkflowView {
    /// Roles that may act on a form view. Views without actions are open to all.
    pub fn allowed_for(&self, role: UserRole) -> bool {
        match self {
            WorkflowView::RequestData => {
                matches!(role, UserRole::Solarteur | UserRole::Energieberater)
            }
            WorkflowView::OfferForm => role == UserRole::Solarteur,
            WorkflowView::PlanForm => {
                matches!(role, UserRole::Solarteur | UserRole::Energieberater)
            }
            WorkflowView::CertificateForm => role == UserRole::Energieberater,
            WorkflowView::AcceptanceForm => role == UserRole::Netzbetreiber,
            WorkflowView::AwaitingRelease | WorkflowView::SummaryOnly => true,
        }
    }

    pub fn actions(&self, role: UserRole) -> Vec<WorkflowAction> {
        if !self.allowed_for(role) {
            return Vec::new();
        }
        match (self, role) {
            (WorkflowView::RequestData, UserRole::Energieberater) => {
                vec![WorkflowAction::RequestCertificateData]
            }
            (WorkflowView::RequestData, _) => vec![WorkflowAction::RequestHouseholdData],
            (WorkflowView::OfferForm, _) => vec![WorkflowAction::SubmitOffer],
            (WorkflowView::PlanForm, UserRole::Energieberater) => {
                vec![WorkflowAction::SubmitEfficiencyMeasures]
            }
            (WorkflowView::PlanForm, _) => vec![WorkflowAction::SubmitInstallationPlan],
            (WorkflowView::CertificateForm, _) => vec![WorkflowAction::SubmitCertificate],
            (WorkflowView::AcceptanceForm, _) => vec![WorkflowAction::SubmitAcceptance],
            (WorkflowView::AwaitingRelease, _) | (WorkflowView::SummaryOnly, _) => Vec::new(),
        }
    }

    pub fn is_actionable(&self, role: UserRole) -> bool {
        !self.actions(role).is_empty()
    }
}

/// Decide which branch a page renders for the given record.
pub fn resolve_view(role: UserRole, status: &str, household: HouseholdDataState) -> WorkflowView {
    let parsed = ProzessStatus::parse(status);

    let candidate = match (parsed, household) {
        (Some(ProzessStatus::DatenAngefordert), HouseholdDataState::Missing) => {
            WorkflowView::RequestData
        }
        (_, HouseholdDataState::ReleasePending) => WorkflowView::AwaitingRelease,
        (Some(ProzessStatus::Genehmigt), _) => WorkflowView::AcceptanceForm,
        (Some(ProzessStatus::AusweisAngefordert), _) => WorkflowView::CertificateForm,
        (Some(ProzessStatus::AusweisErstellt), _) if role == UserRole::Energieberater => {
            WorkflowView::PlanForm
        }
        (Some(ProzessStatus::DatenFreigegeben), HouseholdDataState::Available)
            if role == UserRole::Solarteur =>
        {
            WorkflowView::OfferForm
        }
        (Some(ProzessStatus::AngebotAngenommen), _) if role == UserRole::Solarteur => {
            WorkflowView::PlanForm
        }
        _ => WorkflowView::SummaryOnly,
    };

    if candidate.allowed_for(role) {
        candidate
    } else {
        WorkflowView::SummaryOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_household_data_requests_data() {
        for role in [UserRole::Solarteur, UserRole::Energieberater] {
            let view = resolve_view(role, "DatenAngefordert", HouseholdDataState::Missing);
            assert_eq!(view, WorkflowView::RequestData);
            assert_eq!(view.actions(role).len(), 1);
        }
        assert_eq!(
            WorkflowView::RequestData.actions(UserRole::Energieberater),
            vec![WorkflowAction::RequestCertificateData]
        );
    }

    #[test]
    fn test_pending_release_has_no_actions() {
        for role in UserRole::all() {
            for status in ProzessStatus::all() {
                let view = resolve_view(role, status.as_str(), HouseholdDataState::ReleasePending);
                assert_eq!(view, WorkflowView::AwaitingRelease);
                assert!(!view.is_actionable(role));
            }
        }
    }

    #[test]
    fn test_status_branches() {
        assert_eq!(
            resolve_view(UserRole::Netzbetreiber, "Genehmigt", HouseholdDataState::Available),
            WorkflowView::AcceptanceForm
        );
        assert_eq!(
            resolve_view(
                UserRole::Energieberater,
                "AusweisAngefordert",
                HouseholdDataState::Available
            ),
            WorkflowView::CertificateForm
        );
        assert_eq!(
            resolve_view(UserRole::Energieberater, "AusweisErstellt", HouseholdDataState::Available),
            WorkflowView::PlanForm
        );
    }

    #[test]
    fn test_installer_branches() {
        assert_eq!(
            resolve_view(UserRole::Solarteur, "DatenFreigegeben", HouseholdDataState::Available),
            WorkflowView::OfferForm
        );
        assert_eq!(
            resolve_view(UserRole::Solarteur, "AngebotAngenommen", HouseholdDataState::Available),
            WorkflowView::PlanForm
        );
        assert_eq!(
            WorkflowView::PlanForm.actions(UserRole::Solarteur),
            vec![WorkflowAction::SubmitInstallationPlan]
        );
    }

    #[test]
    fn test_installer_never_gets_measures_plan() {
        let view = resolve_view(UserRole::Solarteur, "AusweisErstellt", HouseholdDataState::Available);
        assert_eq!(view, WorkflowView::SummaryOnly);
        assert!(view.actions(UserRole::Solarteur).is_empty());
        assert_eq!(
            resolve_view(UserRole::Energieberater, "AusweisErstellt", HouseholdDataState::Available)
                .actions(UserRole::Energieberater),
            vec![WorkflowAction::SubmitEfficiencyMeasures]
        );
    }

    #[test]
    fn test_roles_without_permission_see_summary() {
        assert_eq!(
            resolve_view(UserRole::Haushalt, "Genehmigt", HouseholdDataState::Available),
            WorkflowView::SummaryOnly
        );
        assert_eq!(
            resolve_view(UserRole::Haushalt, "DatenAngefordert", HouseholdDataState::Missing),
            WorkflowView::SummaryOnly
        );
        assert_eq!(
            resolve_view(UserRole::Energieberater, "DatenFreigegeben", HouseholdDataState::Available),
            WorkflowView::SummaryOnly
        );
    }

    #[test]
    fn test_unknown_or_failed_falls_back_to_summary() {
        assert_eq!(
            resolve_view(UserRole::Solarteur, "Irgendwas", HouseholdDataState::Available),
            WorkflowView::SummaryOnly
        );
        assert_eq!(
            resolve_view(UserRole::Solarteur, "AnfrageGestellt", HouseholdDataState::Failed),
            WorkflowView::SummaryOnly
        );
        assert_eq!(
            resolve_view(UserRole::Solarteur, "DatenAngefordert", HouseholdDataState::Available),
            WorkflowView::SummaryOnly
        );
    }

    #[test]
    fn test_household_state_from_result() {
        let ok: Result<(), ApiError> = Ok(());
        assert_eq!(HouseholdDataState::from_result(&ok), HouseholdDataState::Available);
        let missing: Result<(), ApiError> = Err(ApiError::from_status(404, ""));
        assert_eq!(HouseholdDataState::from_result(&missing), HouseholdDataState::Missing);
        let pending: Result<(), ApiError> = Err(ApiError::from_status(412, ""));
        assert_eq!(
            HouseholdDataState::from_result(&pending),
            HouseholdDataState::ReleasePending
        );
        let other: Result<(), ApiError> = Err(ApiError::from_status(418, ""));
        assert_eq!(HouseholdDataState::from_result(&other), HouseholdDataState::Failed);
    }

    #[test]
    fn test_every_action_has_one_endpoint() {
        assert_eq!(WorkflowAction::SubmitOffer.endpoint(4), "/api/antraege/4/angebote");
        assert_eq!(WorkflowAction::SubmitAcceptance.endpoint(4), "/api/antraege/4/abnahme");
        assert_eq!(
            WorkflowAction::SubmitEfficiencyMeasures.endpoint(9),
            "/api/ausweis-anfragen/9/massnahmen"
        );
    }
}
