//! Lifecycle of one form submission.
//!
//! `start` validates the raw form; only when it returns the DTO may the
//! caller issue the request. `finish` consumes the request outcome and tells
//! the page what to do next. The success flag is raised at most once.

use super::api_error::ApiError;
use super::validation::{FieldErrors, FormValidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
    Unauthorized,
}

/// What the page does after a request finished
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitEffect {
    /// Raise the success flag and optionally navigate away
    Succeeded { navigate_to: Option<String> },
    /// End the session and go to the login page
    RedirectToLogin,
    /// Server rejected individual fields
    ShowFieldErrors(FieldErrors),
    /// Generic failure dialog
    ShowFailure(String),
    /// Late or duplicate completion, nothing to do
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StartError {
    Invalid(FieldErrors),
    AlreadySubmitting,
    AlreadySucceeded,
}

#[derive(Debug, Clone, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn succeeded(&self) -> bool {
        self.state == SubmissionState::Succeeded
    }

    /// Validate `form` and move to `Submitting`. On error the state is left
    /// untouched and no request may be sent.
    pub fn start<F: FormValidate>(&mut self, form: &F) -> Result<F::Output, StartError> {
        self.guard()?;
        let dto = form.validate().map_err(StartError::Invalid)?;
        self.state = SubmissionState::Submitting;
        Ok(dto)
    }

    /// Start an action without form input (e.g. "request data")
    pub fn start_action(&mut self) -> Result<(), StartError> {
        self.guard()?;
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    fn guard(&self) -> Result<(), StartError> {
        match self.state {
            SubmissionState::Submitting => Err(StartError::AlreadySubmitting),
            SubmissionState::Succeeded => Err(StartError::AlreadySucceeded),
            _ => Ok(()),
        }
    }

    pub fn finish<T>(
        &mut self,
        result: Result<T, ApiError>,
        navigate_to: Option<&str>,
    ) -> SubmitEffect {
        if self.state != SubmissionState::Submitting {
            return SubmitEffect::Ignored;
        }

        match result {
            Ok(_) => {
                self.state = SubmissionState::Succeeded;
                SubmitEffect::Succeeded {
                    navigate_to: navigate_to.map(str::to_string),
                }
            }
            Err(ApiError::Authentication(_)) => {
                self.state = SubmissionState::Unauthorized;
                SubmitEffect::RedirectToLogin
            }
            Err(ApiError::Validation(errors)) => {
                self.state = SubmissionState::Failed;
                SubmitEffect::ShowFieldErrors(errors)
            }
            Err(other) => {
                self.state = SubmissionState::Failed;
                SubmitEffect::ShowFailure(other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Form {
        value: String,
    }

    impl FormValidate for Form {
        type Output = f64;

        fn validate(&self) -> Result<f64, FieldErrors> {
            self.value.parse::<f64>().map_err(|_| {
                let mut errors = FieldErrors::new();
                errors.insert("value", "keine Zahl");
                errors
            })
        }
    }

    #[test]
    fn test_invalid_form_never_starts() {
        let mut submission = Submission::new();
        let result = submission.start(&Form {
            value: "abc".into(),
        });
        assert!(matches!(result, Err(StartError::Invalid(_))));
        assert_eq!(submission.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_success_is_reported_once() {
        let mut submission = Submission::new();
        assert_eq!(submission.start(&Form { value: "1".into() }), Ok(1.0));
        assert_eq!(
            submission.finish(Ok::<(), ApiError>(()), Some("/solarteur/antraege")),
            SubmitEffect::Succeeded {
                navigate_to: Some("/solarteur/antraege".to_string())
            }
        );
        assert_eq!(
            submission.finish(Ok::<(), ApiError>(()), Some("/solarteur/antraege")),
            SubmitEffect::Ignored
        );
        assert!(submission.succeeded());
        assert_eq!(submission.start_action(), Err(StartError::AlreadySucceeded));
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut submission = Submission::new();
        submission.start_action().unwrap();
        assert_eq!(submission.start_action(), Err(StartError::AlreadySubmitting));
    }

    #[test]
    fn test_forbidden_redirects_to_login() {
        let mut submission = Submission::new();
        submission.start_action().unwrap();
        let effect = submission.finish::<()>(Err(ApiError::from_status(403, "")), None);
        assert_eq!(effect, SubmitEffect::RedirectToLogin);
        assert_eq!(submission.state(), SubmissionState::Unauthorized);
    }

    #[test]
    fn test_failure_allows_resubmission() {
        let mut submission = Submission::new();
        submission.start_action().unwrap();
        let effect = submission.finish::<()>(Err(ApiError::from_status(500, "boom")), None);
        assert!(matches!(effect, SubmitEffect::ShowFailure(_)));
        assert!(submission.start_action().is_ok());
    }
}
