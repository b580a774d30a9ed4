//! Error taxonomy of every backend call made by the dashboard.
//!
//! - `Authentication` (401/403): session ends, user is sent to the login page
//! - `Precondition` (404/412): workflow specific, e.g. household data missing
//!   or a data release still pending
//! - `Validation`: field errors, either from local form validation or a
//!   400/422 body of the form `{"errors": {"field": "message"}}`
//! - `Failure`: everything else, shown as a generic modal

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::validation::FieldErrors;

/// Meaning of a 404/412 response inside the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Precondition {
    /// 404: the prerequisite record (usually household data) does not exist
    #[error("Die benötigten Daten liegen nicht vor")]
    MissingData,
    /// 412: a data release was requested and the household has not answered
    #[error("Die Datenfreigabe des Haushalts steht noch aus")]
    ReleasePending,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Nicht angemeldet oder keine Berechtigung (HTTP {0})")]
    Authentication(u16),

    #[error("Voraussetzung nicht erfüllt: {0}")]
    Precondition(Precondition),

    #[error("Eingaben ungültig")]
    Validation(FieldErrors),

    #[error("Anfrage fehlgeschlagen (HTTP {status}): {message}")]
    Failure { status: u16, message: String },

    #[error("Netzwerkfehler: {0}")]
    Network(String),

    #[error("Antwort konnte nicht gelesen werden: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct ValidationBody {
    errors: BTreeMap<String, String>,
}

impl ApiError {
    /// Classify a non-2xx response. `body` is the raw response text, used to
    /// pick up server-side field errors.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Authentication(status),
            404 => ApiError::Precondition(Precondition::MissingData),
            412 => ApiError::Precondition(Precondition::ReleasePending),
            400 | 422 => match serde_json::from_str::<ValidationBody>(body) {
                Ok(parsed) if !parsed.errors.is_empty() => {
                    ApiError::Validation(FieldErrors::from_map(parsed.errors))
                }
                _ => ApiError::Failure {
                    status,
                    message: body.to_string(),
                },
            },
            _ => ApiError::Failure {
                status,
                message: body.to_string(),
            },
        }
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, ApiError::Authentication(_))
    }

    pub fn precondition(&self) -> Option<Precondition> {
        match self {
            ApiError::Precondition(p) => Some(*p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_share_one_policy() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Authentication(401));
        assert_eq!(ApiError::from_status(403, ""), ApiError::Authentication(403));
        assert!(ApiError::from_status(403, "forbidden").is_authentication());
    }

    #[test]
    fn test_workflow_preconditions() {
        assert_eq!(
            ApiError::from_status(404, "").precondition(),
            Some(Precondition::MissingData)
        );
        assert_eq!(
            ApiError::from_status(412, "").precondition(),
            Some(Precondition::ReleasePending)
        );
        assert_eq!(ApiError::from_status(409, "").precondition(), None);
    }

    #[test]
    fn test_precondition_message_is_german() {
        assert_eq!(
            ApiError::from_status(404, "").to_string(),
            "Voraussetzung nicht erfüllt: Die benötigten Daten liegen nicht vor"
        );
        let pending = ApiError::from_status(412, "").to_string();
        assert!(pending.ends_with("Die Datenfreigabe des Haushalts steht noch aus"));
        assert!(!pending.contains("ReleasePending"));
    }

    #[test]
    fn test_server_field_errors() {
        let body = r#"{"errors": {"kapazitaet": "Zu groß"}}"#;
        match ApiError::from_status(422, body) {
            ApiError::Validation(errors) => {
                assert_eq!(errors.get("kapazitaet"), Some("Zu groß"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bad_request_without_errors_is_failure() {
        let err = ApiError::from_status(400, "kaputt");
        assert_eq!(
            err,
            ApiError::Failure {
                status: 400,
                message: "kaputt".to_string()
            }
        );
    }
}
