use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Routes};
use leptos_router::path;

use super::AppRoute;
use crate::domain::a001_pv_antrag::ui::create::CreateAntragPage;
use crate::domain::a001_pv_antrag::ui::details::{
    HaushaltAntragPage, NetzbetreiberAntragPage, SolarteurAntragPage,
};
use crate::domain::a001_pv_antrag::ui::list::{
    AdminAntraegePage, HaushaltAntraegePage, NetzbetreiberAntraegePage, SolarteurAntraegePage,
};
use crate::domain::a004_energieausweis::ui::details::AnfrageDetailPage;
use crate::domain::a004_energieausweis::ui::list::AnfragenListPage;
use crate::domain::a004_energieausweis::ui::request::HaushaltEnergieausweisPage;
use crate::domain::a006_haushaltsdaten::ui::form::HaushaltsdatenPage;
use crate::domain::a007_rechnung::ui::list::RechnungenPage;
use crate::domain::a008_vertrag::ui::list::VertraegePage;
use crate::domain::a009_smart_meter::ui::overview::SmartMeterPage;
use crate::layout::RoleLayout;
use crate::shared::components::loading::Loading;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersListPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/") view=RoleHomeRedirect />

            <ParentRoute path=path!("/haushalt") view=|| view! { <RoleLayout role=UserRole::Haushalt /> }>
                <Route path=path!("") view=HaushaltAntraegePage />
                <Route path=path!("antraege") view=HaushaltAntraegePage />
                <Route path=path!("antraege/neu") view=CreateAntragPage />
                <Route path=path!("antraege/:id") view=HaushaltAntragPage />
                <Route path=path!("daten") view=HaushaltsdatenPage />
                <Route path=path!("energieausweis") view=HaushaltEnergieausweisPage />
                <Route path=path!("rechnungen") view=RechnungenPage />
                <Route path=path!("vertraege") view=VertraegePage />
                <Route path=path!("smartmeter") view=SmartMeterPage />
            </ParentRoute>

            <ParentRoute path=path!("/solarteur") view=|| view! { <RoleLayout role=UserRole::Solarteur /> }>
                <Route path=path!("") view=SolarteurAntraegePage />
                <Route path=path!("antraege") view=SolarteurAntraegePage />
                <Route path=path!("antraege/:id") view=SolarteurAntragPage />
            </ParentRoute>

            <ParentRoute path=path!("/energieberater") view=|| view! { <RoleLayout role=UserRole::Energieberater /> }>
                <Route path=path!("") view=AnfragenListPage />
                <Route path=path!("anfragen") view=AnfragenListPage />
                <Route path=path!("anfragen/:id") view=AnfrageDetailPage />
            </ParentRoute>

            <ParentRoute path=path!("/netzbetreiber") view=|| view! { <RoleLayout role=UserRole::Netzbetreiber /> }>
                <Route path=path!("") view=NetzbetreiberAntraegePage />
                <Route path=path!("antraege") view=NetzbetreiberAntraegePage />
                <Route path=path!("antraege/:id") view=NetzbetreiberAntragPage />
            </ParentRoute>

            <ParentRoute path=path!("/admin") view=|| view! { <RoleLayout role=UserRole::Admin /> }>
                <Route path=path!("") view=UsersListPage />
                <Route path=path!("benutzer") view=UsersListPage />
                <Route path=path!("antraege") view=AdminAntraegePage />
            </ParentRoute>
        </Routes>
    }
}

/// `/` leads to the home page of the signed in role, or to the login
#[component]
fn RoleHomeRedirect() -> impl IntoView {
    let auth = use_auth();

    move || {
        if auth.is_restoring() {
            return view! { <Loading /> }.into_any();
        }
        let target = auth
            .role()
            .map(AppRoute::home_for)
            .unwrap_or(AppRoute::Login);
        view! { <Redirect path=target.path() /> }.into_any()
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Seite nicht gefunden"</h1>
            <a href="/">"Zur Startseite"</a>
        </div>
    }
}
