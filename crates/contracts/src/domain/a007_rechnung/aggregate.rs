use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RechnungStatus {
    Offen,
    Bezahlt,
    Storniert,
}

impl RechnungStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RechnungStatus::Offen => "Offen",
            RechnungStatus::Bezahlt => "Bezahlt",
            RechnungStatus::Storniert => "Storniert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rechnung {
    pub rechnung_id: i64,
    pub rechnungsnummer: String,
    pub beschreibung: String,
    pub betrag_eur: f64,
    pub rechnungsdatum: NaiveDate,
    pub faellig_am: NaiveDate,
    pub status: RechnungStatus,
}

impl Rechnung {
    pub fn is_payable(&self) -> bool {
        self.status == RechnungStatus::Offen
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_payable() && self.faellig_am < today
    }
}

/// Filter of the invoice list, sent as query string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RechnungFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RechnungStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub von: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bis: Option<NaiveDate>,
}

/// Sum of all open invoices
pub fn offener_betrag(rechnungen: &[Rechnung]) -> f64 {
    rechnungen
        .iter()
        .filter(|r| r.is_payable())
        .map(|r| r.betrag_eur)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_export::to_csv;

    fn rechnung(id: i64, status: RechnungStatus, faellig: &str) -> Rechnung {
        Rechnung {
            rechnung_id: id,
            rechnungsnummer: format!("RE-2026-{:04}", id),
            beschreibung: "Abschlag \"Oktober\"".into(),
            betrag_eur: 89.5,
            rechnungsdatum: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            faellig_am: NaiveDate::parse_from_str(faellig, "%Y-%m-%d").unwrap(),
            status,
        }
    }

    #[test]
    fn test_overdue_only_when_open() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert!(rechnung(1, RechnungStatus::Offen, "2026-10-15").is_overdue(today));
        assert!(!rechnung(2, RechnungStatus::Bezahlt, "2026-10-15").is_overdue(today));
        assert!(!rechnung(3, RechnungStatus::Offen, "2026-10-30").is_overdue(today));
    }

    #[test]
    fn test_open_amount() {
        let list = vec![
            rechnung(1, RechnungStatus::Offen, "2026-10-15"),
            rechnung(2, RechnungStatus::Bezahlt, "2026-10-15"),
            rechnung(3, RechnungStatus::Offen, "2026-11-15"),
        ];
        assert_eq!(offener_betrag(&list), 179.0);
    }

    #[test]
    fn test_invoices_export_as_csv() {
        let list = vec![
            rechnung(1, RechnungStatus::Offen, "2026-10-15"),
            rechnung(2, RechnungStatus::Bezahlt, "2026-10-15"),
        ];
        let csv = to_csv(&list).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(r#""rechnungId","rechnungsnummer""#));
        assert!(lines[1].contains(r#""Abschlag ""Oktober""","#));
        assert!(lines[2].ends_with(r#""Bezahlt""#));
    }

    #[test]
    fn test_filter_skips_empty_fields() {
        let filter = RechnungFilter {
            status: Some(RechnungStatus::Offen),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&filter).unwrap(), r#"{"status":"Offen"}"#);
    }
}
