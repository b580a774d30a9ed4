pub mod sidebar;
pub mod top_header;

use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::system::auth::guard::RequireRole;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Application shell:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(role: UserRole, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside class="app-sidebar">
                    <Sidebar role=role />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}

/// Parent route view of a role: guard + shell around the nested page
#[component]
pub fn RoleLayout(role: UserRole) -> impl IntoView {
    view! {
        <RequireRole role=role>
            <Shell role=role>
                <Outlet />
            </Shell>
        </RequireRole>
    }
}
