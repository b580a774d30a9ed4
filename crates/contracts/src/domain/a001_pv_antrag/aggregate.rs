use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::ProzessStatus;
use crate::shared::validation::{optional_text, parse_date, FieldErrors, FormValidate, ValidationRules};

// ============================================================================
// Read model
// ============================================================================

/// Photovoltaic installation request as returned by `GET /api/antraege`.
///
/// `prozess_status` is kept as the raw backend string; use [`PvAntrag::status`]
/// to interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvAntrag {
    pub anlage_id: i64,
    pub haushalt_id: i64,
    pub solarteur_id: Option<i64>,
    pub prozess_status: String,
    pub nvp_pruefung: bool,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub erstellt_am: Option<String>,
}

/// The installer endpoints return the same record under this name
pub type SolarteurResponse = PvAntrag;

impl PvAntrag {
    pub fn status(&self) -> Option<ProzessStatus> {
        ProzessStatus::parse(&self.prozess_status)
    }

    pub fn status_label(&self) -> String {
        self.status()
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| self.prozess_status.clone())
    }
}

// ============================================================================
// Household: new request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePvAntragDto {
    pub adresse: String,
    pub wunschleistung_kwp: Option<f64>,
    pub bemerkung: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreatePvAntragForm {
    pub adresse: String,
    pub wunschleistung_kwp: String,
    pub bemerkung: String,
}

impl FormValidate for CreatePvAntragForm {
    type Output = CreatePvAntragDto;

    fn validate(&self) -> Result<CreatePvAntragDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            "adresse",
            ValidationRules::required()
                .with_max_length(200)
                .validate_string(&self.adresse, "Adresse"),
        );
        let wunschleistung = if self.wunschleistung_kwp.trim().is_empty() {
            None
        } else {
            errors.check(
                "wunschleistung_kwp",
                ValidationRules::none()
                    .with_min(0.5)
                    .with_max(100.0)
                    .validate_decimal(&self.wunschleistung_kwp, "Wunschleistung"),
            )
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreatePvAntragDto {
            adresse: self.adresse.trim().to_string(),
            wunschleistung_kwp: wunschleistung,
            bemerkung: optional_text(&self.bemerkung),
        })
    }
}

// ============================================================================
// Grid operator: approval with grid compatibility check (NVP)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenehmigungDto {
    pub nvp_pruefung: bool,
    pub bemerkung: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenehmigungForm {
    pub nvp_pruefung: bool,
    pub bemerkung: String,
}

impl FormValidate for GenehmigungForm {
    type Output = GenehmigungDto;

    fn validate(&self) -> Result<GenehmigungDto, FieldErrors> {
        if !self.nvp_pruefung {
            let mut errors = FieldErrors::new();
            errors.insert(
                "nvp_pruefung",
                "Die Netzverträglichkeitsprüfung muss vor der Genehmigung bestätigt werden",
            );
            return Err(errors);
        }
        Ok(GenehmigungDto {
            nvp_pruefung: true,
            bemerkung: optional_text(&self.bemerkung),
        })
    }
}

// ============================================================================
// Acceptance / sign-off
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbnahmeDto {
    pub abnahme_datum: NaiveDate,
    pub zaehlernummer: String,
    pub bemerkung: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbnahmeForm {
    pub abnahme_datum: String,
    pub zaehlernummer: String,
    pub bemerkung: String,
}

impl FormValidate for AbnahmeForm {
    type Output = AbnahmeDto;

    fn validate(&self) -> Result<AbnahmeDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let datum = errors.check(
            "abnahme_datum",
            parse_date(&self.abnahme_datum).ok_or_else(|| "Bitte ein gültiges Datum wählen".to_string()),
        );
        errors.check(
            "zaehlernummer",
            ValidationRules::required()
                .with_max_length(32)
                .validate_string(&self.zaehlernummer, "Zählernummer"),
        );

        match datum {
            Some(abnahme_datum) if errors.is_empty() => Ok(AbnahmeDto {
                abnahme_datum,
                zaehlernummer: self.zaehlernummer.trim().to_string(),
                bemerkung: optional_text(&self.bemerkung),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_antrag_parses_camel_case() {
        let json = r#"{"anlageId": 3, "haushaltId": 9, "solarteurId": null,
                       "prozessStatus": "Genehmigt", "nvpPruefung": true}"#;
        let antrag: PvAntrag = serde_json::from_str(json).unwrap();
        assert_eq!(antrag.status(), Some(ProzessStatus::Genehmigt));
        assert_eq!(antrag.adresse, None);
    }

    #[test]
    fn test_unknown_status_label_falls_back_to_raw() {
        let antrag = PvAntrag {
            anlage_id: 1,
            haushalt_id: 1,
            solarteur_id: None,
            prozess_status: "Storniert".into(),
            nvp_pruefung: false,
            adresse: None,
            erstellt_am: None,
        };
        assert_eq!(antrag.status_label(), "Storniert");
    }

    #[test]
    fn test_genehmigung_requires_nvp() {
        assert!(GenehmigungForm::default().validate().is_err());
        let form = GenehmigungForm {
            nvp_pruefung: true,
            bemerkung: " ".into(),
        };
        assert_eq!(
            form.validate(),
            Ok(GenehmigungDto {
                nvp_pruefung: true,
                bemerkung: None
            })
        );
    }

    #[test]
    fn test_abnahme_form() {
        let form = AbnahmeForm {
            abnahme_datum: "2026-11-02".into(),
            zaehlernummer: "1EBZ0100507409".into(),
            bemerkung: String::new(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.abnahme_datum, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap());

        let errors = AbnahmeForm::default().validate().unwrap_err();
        assert!(errors.get("abnahme_datum").is_some());
        assert!(errors.get("zaehlernummer").is_some());
    }

    #[test]
    fn test_create_antrag_optional_power() {
        let form = CreatePvAntragForm {
            adresse: "Hauptstr. 1, 12345 Musterstadt".into(),
            wunschleistung_kwp: "".into(),
            bemerkung: "".into(),
        };
        assert_eq!(form.validate().unwrap().wunschleistung_kwp, None);

        let form = CreatePvAntragForm {
            wunschleistung_kwp: "acht".into(),
            ..form
        };
        assert!(form.validate().unwrap_err().get("wunschleistung_kwp").is_some());
    }
}
