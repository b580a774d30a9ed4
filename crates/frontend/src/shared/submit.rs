//! Reactive wrapper around `contracts::shared::submission::Submission`.
//!
//! A `SubmitHandle` belongs to one form or action button. It validates the
//! form, sends exactly one request at a time and applies the outcome:
//! field errors inline, failures in the modal, authentication errors end the
//! session, success raises the flag once and navigates after a short pause.

use std::future::Future;

use contracts::shared::api_error::ApiError;
use contracts::shared::submission::{StartError, SubmitEffect, Submission};
use contracts::shared::validation::{FieldErrors, FormValidate};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::shared::api_utils::ApiClient;
use crate::system::auth::context::{use_auth, AuthContext};

/// Pause between the success message and the navigation
pub const SUCCESS_NAVIGATION_DELAY_MS: u32 = 800;

#[derive(Clone, Copy)]
pub struct SubmitHandle {
    submission: RwSignal<Submission>,
    errors: RwSignal<FieldErrors>,
    failure: RwSignal<Option<String>>,
    redirect: RwSignal<Option<String>>,
    auth: AuthContext,
}

impl SubmitHandle {
    /// Must be called inside a component below the router
    pub fn new() -> Self {
        let handle = Self {
            submission: RwSignal::new(Submission::new()),
            errors: RwSignal::new(FieldErrors::new()),
            failure: RwSignal::new(None),
            redirect: RwSignal::new(None),
            auth: use_auth(),
        };

        let navigate = use_navigate();
        let redirect = handle.redirect;
        Effect::new(move |_| {
            if let Some(path) = redirect.get() {
                navigate(&path, Default::default());
            }
        });

        handle
    }

    pub fn is_submitting(&self) -> bool {
        self.submission.with(|s| s.is_submitting())
    }

    pub fn succeeded(&self) -> bool {
        self.submission.with(|s| s.succeeded())
    }

    pub fn errors(&self) -> RwSignal<FieldErrors> {
        self.errors
    }

    pub fn failure(&self) -> RwSignal<Option<String>> {
        self.failure
    }

    /// Allow the same handle to be used again after a success
    pub fn reset(&self) {
        self.submission.set(Submission::new());
        self.errors.set(FieldErrors::new());
    }

    /// Validate `form` and, only if valid, send it with `send`
    pub fn submit<F, T, Fut, S>(&self, form: &F, navigate_to: Option<AppRoute>, send: S)
    where
        F: FormValidate,
        F::Output: 'static,
        S: FnOnce(ApiClient, F::Output) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let started = self.submission.try_update(|s| s.start(form));
        let dto = match started {
            Some(Ok(dto)) => dto,
            Some(Err(StartError::Invalid(errors))) => {
                log::debug!("form rejected locally: {} field(s)", errors.len());
                self.errors.set(errors);
                return;
            }
            Some(Err(refused)) => {
                log::debug!("submit ignored: {:?}", refused);
                return;
            }
            None => return,
        };

        self.errors.set(FieldErrors::new());
        let client = self.auth.client();
        let handle = *self;
        spawn_local(async move {
            let result = send(client, dto).await;
            handle.finish(result, navigate_to);
        });
    }

    /// Run an action without form input
    pub fn run<T, Fut, S>(&self, navigate_to: Option<AppRoute>, send: S)
    where
        S: FnOnce(ApiClient) -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        match self.submission.try_update(|s| s.start_action()) {
            Some(Ok(())) => {}
            Some(Err(refused)) => {
                log::debug!("action ignored: {:?}", refused);
                return;
            }
            None => return,
        }

        let client = self.auth.client();
        let handle = *self;
        spawn_local(async move {
            let result = send(client).await;
            handle.finish(result, navigate_to);
        });
    }

    fn finish<T>(&self, result: Result<T, ApiError>, navigate_to: Option<AppRoute>) {
        let target = navigate_to.map(|r| r.path());
        let Some(effect) = self
            .submission
            .try_update(|s| s.finish(result, target.as_deref()))
        else {
            return;
        };

        match effect {
            SubmitEffect::Succeeded { navigate_to } => {
                if let Some(path) = navigate_to {
                    let redirect = self.redirect;
                    spawn_local(async move {
                        TimeoutFuture::new(SUCCESS_NAVIGATION_DELAY_MS).await;
                        redirect.set(Some(path));
                    });
                }
            }
            SubmitEffect::RedirectToLogin => {
                log::warn!("request rejected as unauthorized, ending session");
                self.auth.logout();
                self.redirect.set(Some(AppRoute::Login.path()));
            }
            SubmitEffect::ShowFieldErrors(errors) => self.errors.set(errors),
            SubmitEffect::ShowFailure(message) => {
                log::warn!("submit failed: {}", message);
                self.failure.set(Some(message));
            }
            SubmitEffect::Ignored => {}
        }
    }
}

impl Default for SubmitHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Redirect to login for an authentication error of a read request.
/// Returns the error unchanged otherwise.
pub fn handle_auth_error(auth: AuthContext, error: ApiError) -> Option<ApiError> {
    if error.is_authentication() {
        log::warn!("session rejected by backend: {}", error);
        auth.logout();
        None
    } else {
        Some(error)
    }
}
