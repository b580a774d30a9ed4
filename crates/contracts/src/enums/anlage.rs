//! Enumerations describing the PV installation itself

use serde::{Deserialize, Serialize};

/// Mounting system of the modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Montagesystem {
    Aufdach,
    Indach,
    Flachdach,
    Freiflaeche,
}

impl Montagesystem {
    pub fn all() -> Vec<Montagesystem> {
        vec![
            Montagesystem::Aufdach,
            Montagesystem::Indach,
            Montagesystem::Flachdach,
            Montagesystem::Freiflaeche,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Montagesystem::Aufdach => "Aufdach",
            Montagesystem::Indach => "Indach",
            Montagesystem::Flachdach => "Flachdach",
            Montagesystem::Freiflaeche => "Freiflaeche",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Montagesystem::Aufdach => "Aufdach-Montage",
            Montagesystem::Indach => "Indach-Montage",
            Montagesystem::Flachdach => "Flachdach-Aufständerung",
            Montagesystem::Freiflaeche => "Freiflächen-Gestell",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|m| m.code() == code)
    }
}

/// Result of the shading analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verschattung {
    Keine,
    Gering,
    Mittel,
    Stark,
}

impl Verschattung {
    pub fn all() -> Vec<Verschattung> {
        vec![
            Verschattung::Keine,
            Verschattung::Gering,
            Verschattung::Mittel,
            Verschattung::Stark,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Verschattung::Keine => "Keine",
            Verschattung::Gering => "Gering",
            Verschattung::Mittel => "Mittel",
            Verschattung::Stark => "Stark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verschattung::Keine => "Keine Verschattung",
            Verschattung::Gering => "Geringe Verschattung",
            Verschattung::Mittel => "Mittlere Verschattung",
            Verschattung::Stark => "Starke Verschattung",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.code() == code)
    }
}

/// Roof or module orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ausrichtung {
    Nord,
    Nordost,
    Ost,
    Suedost,
    Sued,
    Suedwest,
    West,
    Nordwest,
}

impl Ausrichtung {
    pub fn all() -> Vec<Ausrichtung> {
        vec![
            Ausrichtung::Nord,
            Ausrichtung::Nordost,
            Ausrichtung::Ost,
            Ausrichtung::Suedost,
            Ausrichtung::Sued,
            Ausrichtung::Suedwest,
            Ausrichtung::West,
            Ausrichtung::Nordwest,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Ausrichtung::Nord => "Nord",
            Ausrichtung::Nordost => "Nordost",
            Ausrichtung::Ost => "Ost",
            Ausrichtung::Suedost => "Suedost",
            Ausrichtung::Sued => "Sued",
            Ausrichtung::Suedwest => "Suedwest",
            Ausrichtung::West => "West",
            Ausrichtung::Nordwest => "Nordwest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ausrichtung::Nord => "Nord",
            Ausrichtung::Nordost => "Nordost",
            Ausrichtung::Ost => "Ost",
            Ausrichtung::Suedost => "Südost",
            Ausrichtung::Sued => "Süd",
            Ausrichtung::Suedwest => "Südwest",
            Ausrichtung::West => "West",
            Ausrichtung::Nordwest => "Nordwest",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Montagesystem::from_code("Indach"), Some(Montagesystem::Indach));
        assert_eq!(Verschattung::from_code("Stark"), Some(Verschattung::Stark));
        assert_eq!(Ausrichtung::from_code("Suedwest"), Some(Ausrichtung::Suedwest));
        assert_eq!(Ausrichtung::from_code("Süd"), None);
    }
}
