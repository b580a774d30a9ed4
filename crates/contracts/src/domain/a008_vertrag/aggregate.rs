use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VertragStatus {
    Entwurf,
    Aktiv,
    Gekuendigt,
    Beendet,
}

impl VertragStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VertragStatus::Entwurf => "Entwurf",
            VertragStatus::Aktiv => "Aktiv",
            VertragStatus::Gekuendigt => "Gekündigt",
            VertragStatus::Beendet => "Beendet",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vertrag {
    pub vertrag_id: i64,
    pub vertragsnummer: String,
    pub vertragsart: String,
    pub vertragspartner: String,
    pub beginn: NaiveDate,
    pub ende: Option<NaiveDate>,
    pub monatlicher_abschlag_eur: Option<f64>,
    pub status: VertragStatus,
}

impl Vertrag {
    pub fn is_running_on(&self, date: NaiveDate) -> bool {
        matches!(self.status, VertragStatus::Aktiv | VertragStatus::Gekuendigt)
            && self.beginn <= date
            && self.ende.map(|ende| date <= ende).unwrap_or(true)
    }

    pub fn laufzeit_label(&self) -> String {
        match self.ende {
            Some(ende) => format!(
                "{} – {}",
                self.beginn.format("%d.%m.%Y"),
                ende.format("%d.%m.%Y")
            ),
            None => format!("seit {}", self.beginn.format("%d.%m.%Y")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertrag(status: VertragStatus, ende: Option<NaiveDate>) -> Vertrag {
        Vertrag {
            vertrag_id: 1,
            vertragsnummer: "V-100".into(),
            vertragsart: "Einspeisevertrag".into(),
            vertragspartner: "Stadtwerke Musterstadt".into(),
            beginn: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ende,
            monatlicher_abschlag_eur: None,
            status,
        }
    }

    #[test]
    fn test_running_contract() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert!(vertrag(VertragStatus::Aktiv, None).is_running_on(day));
        assert!(vertrag(
            VertragStatus::Gekuendigt,
            NaiveDate::from_ymd_opt(2026, 12, 31)
        )
        .is_running_on(day));
        assert!(!vertrag(VertragStatus::Beendet, None).is_running_on(day));
        assert!(!vertrag(VertragStatus::Aktiv, NaiveDate::from_ymd_opt(2026, 6, 30)).is_running_on(day));
    }

    #[test]
    fn test_laufzeit_label() {
        assert_eq!(vertrag(VertragStatus::Aktiv, None).laufzeit_label(), "seit 01.01.2025");
    }
}
