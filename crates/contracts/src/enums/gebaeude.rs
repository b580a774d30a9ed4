//! Enumerations describing the building of a household

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heizungsart {
    Gas,
    Oel,
    Waermepumpe,
    Fernwaerme,
    Pellets,
    Strom,
}

impl Heizungsart {
    pub fn all() -> Vec<Heizungsart> {
        vec![
            Heizungsart::Gas,
            Heizungsart::Oel,
            Heizungsart::Waermepumpe,
            Heizungsart::Fernwaerme,
            Heizungsart::Pellets,
            Heizungsart::Strom,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Heizungsart::Gas => "Gas",
            Heizungsart::Oel => "Oel",
            Heizungsart::Waermepumpe => "Waermepumpe",
            Heizungsart::Fernwaerme => "Fernwaerme",
            Heizungsart::Pellets => "Pellets",
            Heizungsart::Strom => "Strom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Heizungsart::Gas => "Gasheizung",
            Heizungsart::Oel => "Ölheizung",
            Heizungsart::Waermepumpe => "Wärmepumpe",
            Heizungsart::Fernwaerme => "Fernwärme",
            Heizungsart::Pellets => "Pelletheizung",
            Heizungsart::Strom => "Elektroheizung",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|h| h.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Daemmqualitaet {
    Keine,
    Teilweise,
    Gut,
    SehrGut,
}

impl Daemmqualitaet {
    pub fn all() -> Vec<Daemmqualitaet> {
        vec![
            Daemmqualitaet::Keine,
            Daemmqualitaet::Teilweise,
            Daemmqualitaet::Gut,
            Daemmqualitaet::SehrGut,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Daemmqualitaet::Keine => "Keine",
            Daemmqualitaet::Teilweise => "Teilweise",
            Daemmqualitaet::Gut => "Gut",
            Daemmqualitaet::SehrGut => "SehrGut",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Daemmqualitaet::Keine => "Keine Dämmung",
            Daemmqualitaet::Teilweise => "Teilweise gedämmt",
            Daemmqualitaet::Gut => "Gut gedämmt",
            Daemmqualitaet::SehrGut => "Sehr gut gedämmt",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.code() == code)
    }
}

/// Energy efficiency class as printed on the certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Effizienzklasse {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Effizienzklasse {
    pub fn all() -> Vec<Effizienzklasse> {
        vec![
            Effizienzklasse::APlus,
            Effizienzklasse::A,
            Effizienzklasse::B,
            Effizienzklasse::C,
            Effizienzklasse::D,
            Effizienzklasse::E,
            Effizienzklasse::F,
            Effizienzklasse::G,
            Effizienzklasse::H,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Effizienzklasse::APlus => "A+",
            Effizienzklasse::A => "A",
            Effizienzklasse::B => "B",
            Effizienzklasse::C => "C",
            Effizienzklasse::D => "D",
            Effizienzklasse::E => "E",
            Effizienzklasse::F => "F",
            Effizienzklasse::G => "G",
            Effizienzklasse::H => "H",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|k| k.code() == code)
    }

    /// Class for a final energy demand in kWh/(m²·a), GEG 2020 Anlage 10
    pub fn from_endenergie(kwh_per_m2a: f64) -> Self {
        const LIMITS: [(f64, Effizienzklasse); 8] = [
            (30.0, Effizienzklasse::APlus),
            (50.0, Effizienzklasse::A),
            (75.0, Effizienzklasse::B),
            (100.0, Effizienzklasse::C),
            (130.0, Effizienzklasse::D),
            (160.0, Effizienzklasse::E),
            (200.0, Effizienzklasse::F),
            (250.0, Effizienzklasse::G),
        ];
        LIMITS
            .iter()
            .find(|(limit, _)| kwh_per_m2a < *limit)
            .map(|(_, class)| *class)
            .unwrap_or(Effizienzklasse::H)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effizienzklasse_serde() {
        let json = serde_json::to_string(&Effizienzklasse::APlus).unwrap();
        assert_eq!(json, "\"A+\"");
        let parsed: Effizienzklasse = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(parsed, Effizienzklasse::C);
    }

    #[test]
    fn test_from_endenergie_boundaries() {
        assert_eq!(Effizienzklasse::from_endenergie(12.0), Effizienzklasse::APlus);
        assert_eq!(Effizienzklasse::from_endenergie(30.0), Effizienzklasse::A);
        assert_eq!(Effizienzklasse::from_endenergie(129.9), Effizienzklasse::D);
        assert_eq!(Effizienzklasse::from_endenergie(250.0), Effizienzklasse::H);
    }

    #[test]
    fn test_ordering_best_first() {
        assert!(Effizienzklasse::APlus < Effizienzklasse::H);
    }
}
