use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Effizienzklasse, ProzessStatus};
use crate::shared::validation::{
    optional_text, parse_date, FieldErrors, FormValidate, ValidationRules,
};

// ============================================================================
// Certificate request
// ============================================================================

/// Household request for an energy certificate, handled by a consultant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AusweisAnfrage {
    pub anfrage_id: i64,
    pub haushalt_id: i64,
    pub energieberater_id: Option<i64>,
    pub prozess_status: String,
    #[serde(default)]
    pub bemerkung: Option<String>,
    #[serde(default)]
    pub erstellt_am: Option<String>,
}

impl AusweisAnfrage {
    pub fn status(&self) -> Option<ProzessStatus> {
        ProzessStatus::parse(&self.prozess_status)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAusweisAnfrageDto {
    pub bemerkung: Option<String>,
}

// ============================================================================
// Certificate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Energieausweis {
    pub ausweis_id: i64,
    pub haushalt_id: i64,
    pub endenergiebedarf: f64,
    pub primaerenergiebedarf: f64,
    pub co2_emissionen: f64,
    pub effizienzklasse: Effizienzklasse,
    pub gueltig_bis: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergieausweisDto {
    pub endenergiebedarf: f64,
    pub primaerenergiebedarf: f64,
    pub co2_emissionen: f64,
    pub effizienzklasse: Effizienzklasse,
    pub gueltig_bis: NaiveDate,
    pub bemerkung: Option<String>,
}

/// Raw certificate form. An empty efficiency class is derived from the
/// final energy demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergieausweisForm {
    pub endenergiebedarf: String,
    pub primaerenergiebedarf: String,
    pub co2_emissionen: String,
    pub effizienzklasse: String,
    pub gueltig_bis: String,
    pub bemerkung: String,
}

impl FormValidate for EnergieausweisForm {
    type Output = EnergieausweisDto;

    fn validate(&self) -> Result<EnergieausweisDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let demand = ValidationRules::required().with_min(0.0).with_max(1000.0);

        let endenergie = errors.check(
            "endenergiebedarf",
            demand.validate_decimal(&self.endenergiebedarf, "Endenergiebedarf"),
        );
        let primaerenergie = errors.check(
            "primaerenergiebedarf",
            demand.validate_decimal(&self.primaerenergiebedarf, "Primärenergiebedarf"),
        );
        let co2 = errors.check(
            "co2_emissionen",
            ValidationRules::required()
                .with_min(0.0)
                .validate_decimal(&self.co2_emissionen, "CO₂-Emissionen"),
        );
        let klasse = if self.effizienzklasse.trim().is_empty() {
            endenergie.map(Effizienzklasse::from_endenergie)
        } else {
            errors.check(
                "effizienzklasse",
                Effizienzklasse::from_code(self.effizienzklasse.trim())
                    .ok_or_else(|| "Unbekannte Effizienzklasse".to_string()),
            )
        };
        let gueltig_bis = errors.check(
            "gueltig_bis",
            parse_date(&self.gueltig_bis).ok_or_else(|| "Bitte ein gültiges Datum wählen".to_string()),
        );

        match (endenergie, primaerenergie, co2, klasse, gueltig_bis) {
            (Some(endenergiebedarf), Some(primaerenergiebedarf), Some(co2_emissionen), Some(effizienzklasse), Some(gueltig_bis))
                if errors.is_empty() =>
            {
                Ok(EnergieausweisDto {
                    endenergiebedarf,
                    primaerenergiebedarf,
                    co2_emissionen,
                    effizienzklasse,
                    gueltig_bis,
                    bemerkung: optional_text(&self.bemerkung),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> EnergieausweisForm {
        EnergieausweisForm {
            endenergiebedarf: "112,4".into(),
            primaerenergiebedarf: "124".into(),
            co2_emissionen: "31".into(),
            effizienzklasse: "".into(),
            gueltig_bis: "2036-10-19".into(),
            bemerkung: "".into(),
        }
    }

    #[test]
    fn test_class_is_derived_when_empty() {
        let dto = form().validate().unwrap();
        assert_eq!(dto.effizienzklasse, Effizienzklasse::D);
    }

    #[test]
    fn test_explicit_class_wins() {
        let dto = EnergieausweisForm {
            effizienzklasse: "C".into(),
            ..form()
        }
        .validate()
        .unwrap();
        assert_eq!(dto.effizienzklasse, Effizienzklasse::C);
    }

    #[test]
    fn test_invalid_values() {
        let errors = EnergieausweisForm {
            endenergiebedarf: "-5".into(),
            effizienzklasse: "Z".into(),
            ..form()
        }
        .validate()
        .unwrap_err();
        assert!(errors.get("endenergiebedarf").is_some());
        assert!(errors.get("effizienzklasse").is_some());
    }
}
