use serde::{Deserialize, Serialize};

use crate::shared::validation::{optional_text, FieldErrors, FormValidate, ValidationRules};

/// Efficiency measure recommended by a consultant after the certificate was issued
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effizienzmassnahme {
    pub massnahme_id: i64,
    pub haushalt_id: i64,
    pub titel: String,
    pub beschreibung: Option<String>,
    pub kosten_eur: f64,
    pub einsparung_kwh_jahr: f64,
    pub prioritaet: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffizienzmassnahmeDto {
    pub titel: String,
    pub beschreibung: Option<String>,
    pub kosten_eur: f64,
    pub einsparung_kwh_jahr: f64,
    pub prioritaet: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffizienzmassnahmeForm {
    pub titel: String,
    pub beschreibung: String,
    pub kosten: String,
    pub einsparung: String,
    pub prioritaet: String,
}

impl Default for EffizienzmassnahmeForm {
    fn default() -> Self {
        Self {
            titel: String::new(),
            beschreibung: String::new(),
            kosten: String::new(),
            einsparung: String::new(),
            prioritaet: "2".to_string(),
        }
    }
}

impl EffizienzmassnahmeForm {
    /// Validate one row; errors are keyed `{prefix}.{field}`
    fn validate_row(&self, prefix: &str, errors: &mut FieldErrors) -> Option<EffizienzmassnahmeDto> {
        let key = |field: &str| format!("{}.{}", prefix, field);

        errors.check(
            &key("titel"),
            ValidationRules::required()
                .with_max_length(120)
                .validate_string(&self.titel, "Titel"),
        );
        let kosten = errors.check(
            &key("kosten"),
            ValidationRules::required()
                .with_min(0.0)
                .validate_decimal(&self.kosten, "Kosten (€)"),
        );
        let einsparung = errors.check(
            &key("einsparung"),
            ValidationRules::required()
                .with_min(0.0)
                .validate_decimal(&self.einsparung, "Einsparung (kWh/Jahr)"),
        );
        let prioritaet = errors.check(
            &key("prioritaet"),
            ValidationRules::required()
                .with_min(1.0)
                .with_max(3.0)
                .validate_integer(&self.prioritaet, "Priorität"),
        );

        Some(EffizienzmassnahmeDto {
            titel: self.titel.trim().to_string(),
            beschreibung: optional_text(&self.beschreibung),
            kosten_eur: kosten?,
            einsparung_kwh_jahr: einsparung?,
            prioritaet: u8::try_from(prioritaet?).ok()?,
        })
    }
}

/// Renovation plan: one or more measures submitted together
#[derive(Debug, Clone, PartialEq)]
pub struct MassnahmenplanForm {
    pub massnahmen: Vec<EffizienzmassnahmeForm>,
}

impl Default for MassnahmenplanForm {
    fn default() -> Self {
        Self {
            massnahmen: vec![EffizienzmassnahmeForm::default()],
        }
    }
}

impl FormValidate for MassnahmenplanForm {
    type Output = Vec<EffizienzmassnahmeDto>;

    fn validate(&self) -> Result<Vec<EffizienzmassnahmeDto>, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.massnahmen.is_empty() {
            errors.insert("massnahmen", "Mindestens eine Maßnahme angeben");
            return Err(errors);
        }

        let rows: Vec<Option<EffizienzmassnahmeDto>> = self
            .massnahmen
            .iter()
            .enumerate()
            .map(|(i, row)| row.validate_row(&format!("massnahmen[{}]", i), &mut errors))
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }
        rows.into_iter().collect::<Option<Vec<_>>>().ok_or(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(titel: &str, kosten: &str) -> EffizienzmassnahmeForm {
        EffizienzmassnahmeForm {
            titel: titel.into(),
            beschreibung: String::new(),
            kosten: kosten.into(),
            einsparung: "1800".into(),
            prioritaet: "1".into(),
        }
    }

    #[test]
    fn test_plan_with_two_measures() {
        let form = MassnahmenplanForm {
            massnahmen: vec![row("Dachdämmung", "18.000"), row("Fenstertausch", "9500")],
        };
        let dtos = form.validate().unwrap();
        assert_eq!(dtos.len(), 2);
        assert_eq!(dtos[0].kosten_eur, 18000.0);
        assert_eq!(dtos[1].prioritaet, 1);
    }

    #[test]
    fn test_errors_point_to_row() {
        let form = MassnahmenplanForm {
            massnahmen: vec![row("Dachdämmung", "1"), row("", "teuer")],
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.get("massnahmen[1].titel").is_some());
        assert!(errors.get("massnahmen[1].kosten").is_some());
        assert!(errors.get("massnahmen[0].titel").is_none());
    }

    #[test]
    fn test_empty_plan_is_rejected() {
        let form = MassnahmenplanForm { massnahmen: vec![] };
        assert!(form.validate().unwrap_err().get("massnahmen").is_some());
    }
}
