use crate::routes::routes::AppRoutes;
use crate::system::auth::context::provide_auth_context;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Session lives in one context; every page builds its client from it.
    let auth = provide_auth_context();
    auth.restore();

    view! {
        <ConfigProvider>
            <Router>
                <AppRoutes />
            </Router>
        </ConfigProvider>
    }
}
