use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub route: AppRoute,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn item(route: AppRoute, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { route, label, icon }
}

pub fn menu_for(role: UserRole) -> Vec<MenuItem> {
    match role {
        UserRole::Haushalt => vec![
            item(AppRoute::HaushaltAntraege, "PV-Anträge", "sun"),
            item(AppRoute::HaushaltDaten, "Haushaltsdaten", "home"),
            item(AppRoute::HaushaltEnergieausweis, "Energieausweis", "award"),
            item(AppRoute::HaushaltSmartMeter, "Smart Meter", "activity"),
            item(AppRoute::HaushaltRechnungen, "Rechnungen", "receipt"),
            item(AppRoute::HaushaltVertraege, "Verträge", "file-text"),
        ],
        UserRole::Solarteur => vec![item(AppRoute::SolarteurAntraege, "Anträge", "sun")],
        UserRole::Energieberater => vec![item(
            AppRoute::EnergieberaterAnfragen,
            "Ausweis-Anfragen",
            "award",
        )],
        UserRole::Netzbetreiber => vec![item(AppRoute::NetzbetreiberAntraege, "Netzanschluss", "zap")],
        UserRole::Admin => vec![
            item(AppRoute::AdminBenutzer, "Benutzer", "users"),
            item(AppRoute::AdminAntraege, "Alle Anträge", "database"),
        ],
    }
}

/// A menu entry is active on its own page and on pages below it
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn Sidebar(role: UserRole) -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__role">{role.display_name()}</div>
            {menu_for(role)
                .into_iter()
                .map(|entry| {
                    let path = entry.route.path();
                    let path_for_active = path.clone();
                    view! {
                        <A href=path attr:class="app-sidebar__link">
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    is_active(&location.pathname.get(), &path_for_active)
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(entry.icon)}
                                    <span>{entry.label}</span>
                                </div>
                            </div>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_household_menu() {
        let labels: Vec<_> = menu_for(UserRole::Haushalt).iter().map(|i| i.label).collect();
        assert_eq!(labels.len(), 6);
        assert!(labels.contains(&"Smart Meter"));
    }

    #[test]
    fn test_active_matching() {
        assert!(is_active("/haushalt/antraege/3", "/haushalt/antraege"));
        assert!(is_active("/haushalt/antraege", "/haushalt/antraege"));
        assert!(!is_active("/haushalt/antraegex", "/haushalt/antraege"));
    }
}
