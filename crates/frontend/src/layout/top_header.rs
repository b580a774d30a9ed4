//! Top bar: product name, signed in user and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn TopHeader() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        auth.logout();
        navigate(&AppRoute::Login.path(), Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("sun")}
                <span class="top-header__title">"Energieportal"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth.user()
                            .map(|u| format!("{} ({})", u.display_name(), u.role.display_name()))
                            .unwrap_or_default()}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Abmelden">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
