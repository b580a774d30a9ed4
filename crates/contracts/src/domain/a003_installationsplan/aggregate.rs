use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Montagesystem, Verschattung};
use crate::shared::validation::{parse_date, FieldErrors, FormValidate, ValidationRules};

/// Installation plan, created once per application after the offer was accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationsPlan {
    pub plan_id: i64,
    pub anlage_id: i64,
    pub kabelfuehrung: String,
    pub montagesystem: Montagesystem,
    pub verschattung: Verschattung,
    pub wechselrichter_position: String,
    pub installationsdatum: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationsPlanDto {
    pub kabelfuehrung: String,
    pub montagesystem: Montagesystem,
    pub verschattung: Verschattung,
    pub wechselrichter_position: String,
    pub installationsdatum: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallationsPlanForm {
    pub kabelfuehrung: String,
    pub montagesystem: String,
    pub verschattung: String,
    pub wechselrichter_position: String,
    pub installationsdatum: String,
}

impl Default for InstallationsPlanForm {
    fn default() -> Self {
        Self {
            kabelfuehrung: String::new(),
            montagesystem: Montagesystem::Aufdach.code().to_string(),
            verschattung: Verschattung::Keine.code().to_string(),
            wechselrichter_position: String::new(),
            installationsdatum: String::new(),
        }
    }
}

impl FormValidate for InstallationsPlanForm {
    type Output = InstallationsPlanDto;

    fn validate(&self) -> Result<InstallationsPlanDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(
            "kabelfuehrung",
            ValidationRules::required()
                .with_max_length(500)
                .validate_string(&self.kabelfuehrung, "Kabelführung"),
        );
        let montagesystem = errors.check(
            "montagesystem",
            Montagesystem::from_code(&self.montagesystem)
                .ok_or_else(|| "Bitte ein Montagesystem wählen".to_string()),
        );
        let verschattung = errors.check(
            "verschattung",
            Verschattung::from_code(&self.verschattung)
                .ok_or_else(|| "Bitte das Ergebnis der Verschattungsanalyse wählen".to_string()),
        );
        errors.check(
            "wechselrichter_position",
            ValidationRules::required()
                .with_max_length(200)
                .validate_string(&self.wechselrichter_position, "Position des Wechselrichters"),
        );
        let datum = errors.check(
            "installationsdatum",
            parse_date(&self.installationsdatum)
                .ok_or_else(|| "Bitte ein gültiges Installationsdatum wählen".to_string()),
        );

        match (montagesystem, verschattung, datum) {
            (Some(montagesystem), Some(verschattung), Some(installationsdatum))
                if errors.is_empty() =>
            {
                Ok(InstallationsPlanDto {
                    kabelfuehrung: self.kabelfuehrung.trim().to_string(),
                    montagesystem,
                    verschattung,
                    wechselrichter_position: self.wechselrichter_position.trim().to_string(),
                    installationsdatum,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_plan() {
        let form = InstallationsPlanForm {
            kabelfuehrung: "Leerrohr Nordseite bis Keller".into(),
            montagesystem: "Indach".into(),
            verschattung: "Gering".into(),
            wechselrichter_position: "Hauswirtschaftsraum".into(),
            installationsdatum: "2026-12-01".into(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.montagesystem, Montagesystem::Indach);
        assert_eq!(dto.verschattung, Verschattung::Gering);
    }

    #[test]
    fn test_invalid_plan() {
        let form = InstallationsPlanForm {
            montagesystem: "Dachrinne".into(),
            ..InstallationsPlanForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("montagesystem").is_some());
        assert!(errors.get("installationsdatum").is_some());
        assert!(errors.get("verschattung").is_none());
    }
}
