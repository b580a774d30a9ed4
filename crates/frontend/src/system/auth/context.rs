//! Authentication context.
//!
//! The session (token + user) is held in a signal provided at the app root.
//! Network code never reads the token from storage; it receives an
//! `ApiClient` built by [`AuthContext::client`]. Storage only mirrors the
//! token so a reload can restore the session.

use contracts::enums::UserRole;
use contracts::shared::api_error::ApiError;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::api_utils::{api_base, ApiClient};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
    restoring: RwSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            restoring: RwSignal::new(false),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.with(|s| s.as_ref().map(|s| s.user.role))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    /// True while a stored token is being checked against the backend
    pub fn is_restoring(&self) -> bool {
        self.restoring.get()
    }

    /// Client carrying the current bearer token
    pub fn client(&self) -> ApiClient {
        let token = self
            .session
            .with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()));
        ApiClient::new(api_base(), token)
    }

    pub async fn login(&self, username: String, password: String) -> Result<UserInfo, ApiError> {
        let response = api::login(username, password).await?;
        storage::save_access_token(&response.access_token);
        log::info!(
            "signed in as {} ({})",
            response.user.username,
            response.user.role.code()
        );
        let user = response.user.clone();
        self.session.set(Some(Session {
            access_token: response.access_token,
            user: response.user,
        }));
        Ok(user)
    }

    /// End the session locally; the backend keeps no logout state
    pub fn logout(&self) {
        storage::clear_access_token();
        self.session.set(None);
    }

    /// Restore the session from a stored token, if it is still valid
    pub fn restore(&self) {
        let Some(access_token) = storage::get_access_token() else {
            return;
        };
        let ctx = *self;
        ctx.restoring.set(true);
        spawn_local(async move {
            let client = ApiClient::new(api_base(), Some(access_token.clone()));
            match api::get_current_user(&client).await {
                Ok(user) => ctx.session.set(Some(Session { access_token, user })),
                Err(e) => {
                    log::info!("stored session discarded: {}", e);
                    storage::clear_access_token();
                }
            }
            ctx.restoring.set(false);
        });
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext::new();
    provide_context(ctx);
    ctx
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided at the app root")
}
