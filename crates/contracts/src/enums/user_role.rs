use serde::{Deserialize, Serialize};

/// Roles of the platform. Every dashboard page belongs to exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Haushalt,
    Solarteur,
    Energieberater,
    Netzbetreiber,
    Admin,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Haushalt => "HAUSHALT",
            UserRole::Solarteur => "SOLARTEUR",
            UserRole::Energieberater => "ENERGIEBERATER",
            UserRole::Netzbetreiber => "NETZBETREIBER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Haushalt => "Haushalt",
            UserRole::Solarteur => "Solarteur",
            UserRole::Energieberater => "Energieberater",
            UserRole::Netzbetreiber => "Netzbetreiber",
            UserRole::Admin => "Administrator",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Haushalt,
            UserRole::Solarteur,
            UserRole::Energieberater,
            UserRole::Netzbetreiber,
            UserRole::Admin,
        ]
    }

    /// Static text of the generic failure dialog
    pub fn failure_text(&self) -> &'static str {
        match self {
            UserRole::Haushalt => {
                "Ihre Anfrage konnte leider nicht verarbeitet werden. Bitte versuchen Sie es später erneut."
            }
            UserRole::Solarteur => {
                "Die Aktion konnte nicht ausgeführt werden. Bitte prüfen Sie die Angaben zum Antrag und senden Sie erneut."
            }
            UserRole::Energieberater => {
                "Die Daten zum Energieausweis konnten nicht gespeichert werden. Bitte senden Sie das Formular erneut."
            }
            UserRole::Netzbetreiber => {
                "Die Prüfung konnte nicht übermittelt werden. Bitte versuchen Sie es erneut."
            }
            UserRole::Admin => "Der Vorgang ist fehlgeschlagen. Details stehen im Browser-Log.",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_code(role.code()), Some(role));
        }
        assert_eq!(UserRole::from_code("GAST"), None);
    }

    #[test]
    fn test_serde_matches_code() {
        let json = serde_json::to_string(&UserRole::Energieberater).unwrap();
        assert_eq!(json, "\"ENERGIEBERATER\"");
    }
}
