pub mod routes;

use contracts::enums::UserRole;

/// Every page of the dashboard. `path()` is the single source of URLs used
/// for links and navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    HaushaltAntraege,
    HaushaltAntragNeu,
    HaushaltAntrag(i64),
    HaushaltDaten,
    HaushaltEnergieausweis,
    HaushaltRechnungen,
    HaushaltVertraege,
    HaushaltSmartMeter,
    SolarteurAntraege,
    SolarteurAntrag(i64),
    EnergieberaterAnfragen,
    EnergieberaterAnfrage(i64),
    NetzbetreiberAntraege,
    NetzbetreiberAntrag(i64),
    AdminBenutzer,
    AdminAntraege,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => "/login".to_string(),
            AppRoute::HaushaltAntraege => "/haushalt/antraege".to_string(),
            AppRoute::HaushaltAntragNeu => "/haushalt/antraege/neu".to_string(),
            AppRoute::HaushaltAntrag(id) => format!("/haushalt/antraege/{}", id),
            AppRoute::HaushaltDaten => "/haushalt/daten".to_string(),
            AppRoute::HaushaltEnergieausweis => "/haushalt/energieausweis".to_string(),
            AppRoute::HaushaltRechnungen => "/haushalt/rechnungen".to_string(),
            AppRoute::HaushaltVertraege => "/haushalt/vertraege".to_string(),
            AppRoute::HaushaltSmartMeter => "/haushalt/smartmeter".to_string(),
            AppRoute::SolarteurAntraege => "/solarteur/antraege".to_string(),
            AppRoute::SolarteurAntrag(id) => format!("/solarteur/antraege/{}", id),
            AppRoute::EnergieberaterAnfragen => "/energieberater/anfragen".to_string(),
            AppRoute::EnergieberaterAnfrage(id) => format!("/energieberater/anfragen/{}", id),
            AppRoute::NetzbetreiberAntraege => "/netzbetreiber/antraege".to_string(),
            AppRoute::NetzbetreiberAntrag(id) => format!("/netzbetreiber/antraege/{}", id),
            AppRoute::AdminBenutzer => "/admin/benutzer".to_string(),
            AppRoute::AdminAntraege => "/admin/antraege".to_string(),
        }
    }

    /// Landing page after login
    pub fn home_for(role: UserRole) -> AppRoute {
        match role {
            UserRole::Haushalt => AppRoute::HaushaltAntraege,
            UserRole::Solarteur => AppRoute::SolarteurAntraege,
            UserRole::Energieberater => AppRoute::EnergieberaterAnfragen,
            UserRole::Netzbetreiber => AppRoute::NetzbetreiberAntraege,
            UserRole::Admin => AppRoute::AdminBenutzer,
        }
    }

    /// Application table of the role
    pub fn antraege_for(role: UserRole) -> AppRoute {
        match role {
            UserRole::Haushalt => AppRoute::HaushaltAntraege,
            UserRole::Solarteur => AppRoute::SolarteurAntraege,
            UserRole::Netzbetreiber => AppRoute::NetzbetreiberAntraege,
            UserRole::Energieberater => AppRoute::EnergieberaterAnfragen,
            UserRole::Admin => AppRoute::AdminAntraege,
        }
    }

    /// Detail page of an application; the admin list has none
    pub fn antrag_for(role: UserRole, anlage_id: i64) -> Option<AppRoute> {
        match role {
            UserRole::Haushalt => Some(AppRoute::HaushaltAntrag(anlage_id)),
            UserRole::Solarteur => Some(AppRoute::SolarteurAntrag(anlage_id)),
            UserRole::Netzbetreiber => Some(AppRoute::NetzbetreiberAntrag(anlage_id)),
            UserRole::Energieberater | UserRole::Admin => None,
        }
    }
}

/// Parse the `:id` segment of a detail route
pub fn parse_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(AppRoute::SolarteurAntraege.path(), "/solarteur/antraege");
        assert_eq!(AppRoute::SolarteurAntrag(42).path(), "/solarteur/antraege/42");
        assert_eq!(AppRoute::Login.path(), "/login");
    }

    #[test]
    fn test_every_role_has_a_home_below_its_prefix() {
        for role in UserRole::all() {
            let home = AppRoute::home_for(role).path();
            let prefix = match role {
                UserRole::Haushalt => "/haushalt/",
                UserRole::Solarteur => "/solarteur/",
                UserRole::Energieberater => "/energieberater/",
                UserRole::Netzbetreiber => "/netzbetreiber/",
                UserRole::Admin => "/admin/",
            };
            assert!(home.starts_with(prefix), "{}", home);
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("17".into())), Some(17));
        assert_eq!(parse_id(Some("neu".into())), None);
        assert_eq!(parse_id(None), None);
    }
}
