use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Ausrichtung, Daemmqualitaet, Effizienzklasse, Heizungsart, UserRole};
use crate::shared::validation::{FieldErrors, FormValidate, ValidationRules};

/// Static household attributes. Several workflow transitions require them;
/// a 404 on fetch means the household never entered them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Haushaltsdaten {
    pub haushalt_id: i64,
    pub bewohner: u32,
    pub heizungsart: Heizungsart,
    pub baujahr: i32,
    pub wohnflaeche_m2: f64,
    pub daemmqualitaet: Daemmqualitaet,
    pub dachausrichtung: Ausrichtung,
    pub dachflaeche_m2: f64,
    pub effizienzklasse: Option<Effizienzklasse>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaushaltsdatenDto {
    pub bewohner: u32,
    pub heizungsart: Heizungsart,
    pub baujahr: i32,
    pub wohnflaeche_m2: f64,
    pub daemmqualitaet: Daemmqualitaet,
    pub dachausrichtung: Ausrichtung,
    pub dachflaeche_m2: f64,
    pub effizienzklasse: Option<Effizienzklasse>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HaushaltsdatenForm {
    pub bewohner: String,
    pub heizungsart: String,
    pub baujahr: String,
    pub wohnflaeche: String,
    pub daemmqualitaet: String,
    pub dachausrichtung: String,
    pub dachflaeche: String,
    pub effizienzklasse: String,
}

impl Default for HaushaltsdatenForm {
    fn default() -> Self {
        Self {
            bewohner: String::new(),
            heizungsart: Heizungsart::Gas.code().to_string(),
            baujahr: String::new(),
            wohnflaeche: String::new(),
            daemmqualitaet: Daemmqualitaet::Teilweise.code().to_string(),
            dachausrichtung: Ausrichtung::Sued.code().to_string(),
            dachflaeche: String::new(),
            effizienzklasse: String::new(),
        }
    }
}

impl From<&Haushaltsdaten> for HaushaltsdatenForm {
    fn from(d: &Haushaltsdaten) -> Self {
        Self {
            bewohner: d.bewohner.to_string(),
            heizungsart: d.heizungsart.code().to_string(),
            baujahr: d.baujahr.to_string(),
            wohnflaeche: d.wohnflaeche_m2.to_string(),
            daemmqualitaet: d.daemmqualitaet.code().to_string(),
            dachausrichtung: d.dachausrichtung.code().to_string(),
            dachflaeche: d.dachflaeche_m2.to_string(),
            effizienzklasse: d
                .effizienzklasse
                .map(|k| k.code().to_string())
                .unwrap_or_default(),
        }
    }
}

impl FormValidate for HaushaltsdatenForm {
    type Output = HaushaltsdatenDto;

    fn validate(&self) -> Result<HaushaltsdatenDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        let current_year = Utc::now().year() as f64;

        let bewohner = errors.check(
            "bewohner",
            ValidationRules::required()
                .with_min(1.0)
                .with_max(50.0)
                .validate_integer(&self.bewohner, "Anzahl Bewohner"),
        );
        let heizungsart = errors.check(
            "heizungsart",
            Heizungsart::from_code(&self.heizungsart)
                .ok_or_else(|| "Bitte eine Heizungsart wählen".to_string()),
        );
        let baujahr = errors.check(
            "baujahr",
            ValidationRules::required()
                .with_min(1800.0)
                .with_max(current_year)
                .validate_integer(&self.baujahr, "Baujahr"),
        );
        let wohnflaeche = errors.check(
            "wohnflaeche",
            ValidationRules::required()
                .with_min(10.0)
                .with_max(5000.0)
                .validate_decimal(&self.wohnflaeche, "Wohnfläche (m²)"),
        );
        let daemmqualitaet = errors.check(
            "daemmqualitaet",
            Daemmqualitaet::from_code(&self.daemmqualitaet)
                .ok_or_else(|| "Bitte die Dämmqualität wählen".to_string()),
        );
        let dachausrichtung = errors.check(
            "dachausrichtung",
            Ausrichtung::from_code(&self.dachausrichtung)
                .ok_or_else(|| "Bitte die Dachausrichtung wählen".to_string()),
        );
        let dachflaeche = errors.check(
            "dachflaeche",
            ValidationRules::required()
                .with_min(0.0)
                .with_max(5000.0)
                .validate_decimal(&self.dachflaeche, "Dachfläche (m²)"),
        );
        let effizienzklasse = if self.effizienzklasse.trim().is_empty() {
            None
        } else {
            errors.check(
                "effizienzklasse",
                Effizienzklasse::from_code(self.effizienzklasse.trim())
                    .ok_or_else(|| "Unbekannte Effizienzklasse".to_string()),
            )
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        match (
            bewohner,
            heizungsart,
            baujahr,
            wohnflaeche,
            daemmqualitaet,
            dachausrichtung,
            dachflaeche,
        ) {
            (
                Some(bewohner),
                Some(heizungsart),
                Some(baujahr),
                Some(wohnflaeche_m2),
                Some(daemmqualitaet),
                Some(dachausrichtung),
                Some(dachflaeche_m2),
            ) => Ok(HaushaltsdatenDto {
                bewohner: bewohner as u32,
                heizungsart,
                baujahr: baujahr as i32,
                wohnflaeche_m2,
                daemmqualitaet,
                dachausrichtung,
                dachflaeche_m2,
                effizienzklasse,
            }),
            _ => Err(errors),
        }
    }
}

/// Pending request of an installer or consultant to see the household data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatenFreigabe {
    pub freigabe_id: i64,
    pub haushalt_id: i64,
    pub angefragt_von: String,
    pub rolle: UserRole,
    #[serde(default)]
    pub angefragt_am: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> HaushaltsdatenForm {
        HaushaltsdatenForm {
            bewohner: "4".into(),
            heizungsart: "Waermepumpe".into(),
            baujahr: "1978".into(),
            wohnflaeche: "142,5".into(),
            daemmqualitaet: "Gut".into(),
            dachausrichtung: "Suedwest".into(),
            dachflaeche: "60".into(),
            effizienzklasse: "".into(),
        }
    }

    #[test]
    fn test_valid_household_data() {
        let dto = form().validate().unwrap();
        assert_eq!(dto.bewohner, 4);
        assert_eq!(dto.wohnflaeche_m2, 142.5);
        assert_eq!(dto.effizienzklasse, None);
    }

    #[test]
    fn test_future_construction_year_is_rejected() {
        let errors = HaushaltsdatenForm {
            baujahr: "3024".into(),
            bewohner: "0".into(),
            ..form()
        }
        .validate()
        .unwrap_err();
        assert!(errors.get("baujahr").is_some());
        assert!(errors.get("bewohner").is_some());
    }

    #[test]
    fn test_form_from_existing_record() {
        let data = Haushaltsdaten {
            haushalt_id: 1,
            bewohner: 2,
            heizungsart: Heizungsart::Oel,
            baujahr: 1965,
            wohnflaeche_m2: 98.0,
            daemmqualitaet: Daemmqualitaet::Keine,
            dachausrichtung: Ausrichtung::Ost,
            dachflaeche_m2: 40.0,
            effizienzklasse: Some(Effizienzklasse::F),
        };
        let form = HaushaltsdatenForm::from(&data);
        assert_eq!(form.heizungsart, "Oel");
        assert_eq!(form.effizienzklasse, "F");
        assert_eq!(form.validate().unwrap().baujahr, 1965);
    }
}
