use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Ausrichtung;
use crate::shared::validation::{FieldErrors, FormValidate, ValidationRules};

/// Offer made by an installer for one PV application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Angebot {
    pub angebot_id: i64,
    pub anlage_id: i64,
    pub modultyp: String,
    pub kapazitaet_kwp: f64,
    pub installationsflaeche_m2: f64,
    pub ausrichtung: Ausrichtung,
    pub kosten_eur: f64,
    pub angenommen: bool,
    pub erstellt_am: DateTime<Utc>,
}

impl Angebot {
    /// Price per installed kWp, `None` for a zero capacity
    pub fn kosten_pro_kwp(&self) -> Option<f64> {
        (self.kapazitaet_kwp > 0.0).then(|| self.kosten_eur / self.kapazitaet_kwp)
    }
}

/// Body of `POST /api/antraege/{id}/angebote`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngebotDto {
    pub modultyp: String,
    pub kapazitaet_kwp: f64,
    pub installationsflaeche_m2: f64,
    pub ausrichtung: Ausrichtung,
    pub kosten_eur: f64,
}

/// Raw input of the offer form
#[derive(Debug, Clone, PartialEq)]
pub struct AngebotForm {
    pub modultyp: String,
    pub kapazitaet: String,
    pub installationsflaeche: String,
    pub ausrichtung: String,
    pub kosten: String,
}

impl Default for AngebotForm {
    fn default() -> Self {
        Self {
            modultyp: String::new(),
            kapazitaet: String::new(),
            installationsflaeche: String::new(),
            ausrichtung: Ausrichtung::Sued.code().to_string(),
            kosten: String::new(),
        }
    }
}

impl FormValidate for AngebotForm {
    type Output = AngebotDto;

    fn validate(&self) -> Result<AngebotDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(
            "modultyp",
            ValidationRules::required()
                .with_max_length(100)
                .validate_string(&self.modultyp, "Modultyp"),
        );
        let kapazitaet = errors.check(
            "kapazitaet",
            ValidationRules::required()
                .with_min(0.1)
                .with_max(1000.0)
                .validate_decimal(&self.kapazitaet, "Kapazität (kWp)"),
        );
        let flaeche = errors.check(
            "installationsflaeche",
            ValidationRules::required()
                .with_min(1.0)
                .with_max(10_000.0)
                .validate_decimal(&self.installationsflaeche, "Installationsfläche (m²)"),
        );
        let ausrichtung = errors.check(
            "ausrichtung",
            Ausrichtung::from_code(&self.ausrichtung)
                .ok_or_else(|| "Bitte eine Ausrichtung wählen".to_string()),
        );
        let kosten = errors.check(
            "kosten",
            ValidationRules::required()
                .with_min(0.0)
                .validate_decimal(&self.kosten, "Kosten (€)"),
        );

        match (kapazitaet, flaeche, ausrichtung, kosten) {
            (Some(kapazitaet_kwp), Some(installationsflaeche_m2), Some(ausrichtung), Some(kosten_eur))
                if errors.is_empty() =>
            {
                Ok(AngebotDto {
                    modultyp: self.modultyp.trim().to_string(),
                    kapazitaet_kwp,
                    installationsflaeche_m2,
                    ausrichtung,
                    kosten_eur,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AngebotForm {
        AngebotForm {
            modultyp: "Monokristallin 420 Wp".into(),
            kapazitaet: "9,66".into(),
            installationsflaeche: "48".into(),
            ausrichtung: "Sued".into(),
            kosten: "14.350,00".into(),
        }
    }

    #[test]
    fn test_valid_offer() {
        let dto = valid_form().validate().unwrap();
        assert_eq!(dto.kapazitaet_kwp, 9.66);
        assert_eq!(dto.kosten_eur, 14350.0);
        assert_eq!(dto.ausrichtung, Ausrichtung::Sued);
    }

    #[test]
    fn test_non_numeric_capacity_is_a_field_error() {
        let form = AngebotForm {
            kapazitaet: "zehn".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("kapazitaet"), Some("Kapazität (kWp) muss eine Zahl sein"));
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = AngebotForm::default().validate().unwrap_err();
        for field in ["modultyp", "kapazitaet", "installationsflaeche", "kosten"] {
            assert!(errors.get(field).is_some(), "missing error for {}", field);
        }
        assert!(errors.get("ausrichtung").is_none());
    }

    #[test]
    fn test_price_per_kwp() {
        let angebot = Angebot {
            angebot_id: 1,
            anlage_id: 2,
            modultyp: "X".into(),
            kapazitaet_kwp: 10.0,
            installationsflaeche_m2: 50.0,
            ausrichtung: Ausrichtung::Sued,
            kosten_eur: 15000.0,
            angenommen: false,
            erstellt_am: Utc::now(),
        };
        assert_eq!(angebot.kosten_pro_kwp(), Some(1500.0));
    }
}
