use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::system::auth::context::use_auth;

fn login_error_text(error: &ApiError) -> String {
    match error {
        ApiError::Authentication(_) => "Benutzername oder Passwort ist falsch.".to_string(),
        ApiError::Network(_) => "Der Server ist nicht erreichbar.".to_string(),
        other => format!("Anmeldung fehlgeschlagen: {}", other),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let navigate = use_navigate();

    // Already signed in (e.g. restored session): go straight to the role home
    let navigate_home = navigate.clone();
    Effect::new(move |_| {
        if let Some(role) = auth.role() {
            navigate_home(&AppRoute::home_for(role).path(), Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.login(username_val, password_val).await {
                Ok(user) => {
                    set_is_loading.set(false);
                    navigate(&AppRoute::home_for(user.role).path(), Default::default());
                }
                Err(e) => {
                    log::info!("login failed: {}", e);
                    set_error_message.set(Some(login_error_text(&e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Energieportal"</h1>
                <h2>"Anmeldung"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Benutzername"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Passwort"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Anmelden..." } else { "Anmelden" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_text() {
        assert_eq!(
            login_error_text(&ApiError::from_status(401, "")),
            "Benutzername oder Passwort ist falsch."
        );
        assert!(login_error_text(&ApiError::from_status(500, "x")).starts_with("Anmeldung fehlgeschlagen"));
    }
}
