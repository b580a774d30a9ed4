use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::context::use_auth;
use crate::routes::AppRoute;
use crate::shared::components::loading::Loading;

/// Renders children only for a signed in user of `role`.
/// Anonymous visitors are sent to the login page.
#[component]
pub fn RequireRole(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !auth.is_restoring() && !auth.is_authenticated() {
            navigate(&AppRoute::Login.path(), Default::default());
        }
    });

    move || {
        if auth.is_restoring() {
            return view! { <Loading /> }.into_any();
        }
        match auth.role() {
            Some(current) if current == role => children().into_any(),
            Some(current) => view! {
                <div class="alert alert--error">
                    "Kein Zugriff. Diese Seite ist für die Rolle "
                    {role.display_name()}
                    " bestimmt. "
                    <a href=AppRoute::home_for(current).path()>"Zur Startseite"</a>
                </div>
            }
            .into_any(),
            None => view! { <Loading /> }.into_any(),
        }
    }
}
