use serde::{Deserialize, Serialize};

/// Process state of a PV application or certificate request.
///
/// The backend owns the state; the dashboard only observes it. The value
/// arrives as an opaque string, so unknown strings are kept out of this enum
/// and handled by [`ProzessStatus::parse`] returning `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProzessStatus {
    AnfrageGestellt,
    DatenAngefordert,
    DatenFreigegeben,
    AngebotGemacht,
    AngebotAngenommen,
    PlanErstellt,
    Genehmigt,
    Abgenommen,
    InstallationAbgeschlossen,
    AusweisAngefordert,
    AusweisErstellt,
}

impl ProzessStatus {
    /// Wire name as sent by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            ProzessStatus::AnfrageGestellt => "AnfrageGestellt",
            ProzessStatus::DatenAngefordert => "DatenAngefordert",
            ProzessStatus::DatenFreigegeben => "DatenFreigegeben",
            ProzessStatus::AngebotGemacht => "AngebotGemacht",
            ProzessStatus::AngebotAngenommen => "AngebotAngenommen",
            ProzessStatus::PlanErstellt => "PlanErstellt",
            ProzessStatus::Genehmigt => "Genehmigt",
            ProzessStatus::Abgenommen => "Abgenommen",
            ProzessStatus::InstallationAbgeschlossen => "InstallationAbgeschlossen",
            ProzessStatus::AusweisAngefordert => "AusweisAngefordert",
            ProzessStatus::AusweisErstellt => "AusweisErstellt",
        }
    }

    /// Parse the backend status string. Surrounding whitespace is ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::all().into_iter().find(|s| s.as_str() == value)
    }

    /// Human readable German label
    pub fn label(&self) -> &'static str {
        match self {
            ProzessStatus::AnfrageGestellt => "Anfrage gestellt",
            ProzessStatus::DatenAngefordert => "Daten angefordert",
            ProzessStatus::DatenFreigegeben => "Daten freigegeben",
            ProzessStatus::AngebotGemacht => "Angebot erstellt",
            ProzessStatus::AngebotAngenommen => "Angebot angenommen",
            ProzessStatus::PlanErstellt => "Installationsplan erstellt",
            ProzessStatus::Genehmigt => "Vom Netzbetreiber genehmigt",
            ProzessStatus::Abgenommen => "Abgenommen",
            ProzessStatus::InstallationAbgeschlossen => "Installation abgeschlossen",
            ProzessStatus::AusweisAngefordert => "Energieausweis angefordert",
            ProzessStatus::AusweisErstellt => "Energieausweis erstellt",
        }
    }

    pub fn all() -> Vec<ProzessStatus> {
        vec![
            ProzessStatus::AnfrageGestellt,
            ProzessStatus::DatenAngefordert,
            ProzessStatus::DatenFreigegeben,
            ProzessStatus::AngebotGemacht,
            ProzessStatus::AngebotAngenommen,
            ProzessStatus::PlanErstellt,
            ProzessStatus::Genehmigt,
            ProzessStatus::Abgenommen,
            ProzessStatus::InstallationAbgeschlossen,
            ProzessStatus::AusweisAngefordert,
            ProzessStatus::AusweisErstellt,
        ]
    }

    /// Linear steps of the photovoltaic flow, in order
    pub fn pv_steps() -> [ProzessStatus; 9] {
        [
            ProzessStatus::AnfrageGestellt,
            ProzessStatus::DatenAngefordert,
            ProzessStatus::DatenFreigegeben,
            ProzessStatus::AngebotGemacht,
            ProzessStatus::AngebotAngenommen,
            ProzessStatus::PlanErstellt,
            ProzessStatus::Genehmigt,
            ProzessStatus::Abgenommen,
            ProzessStatus::InstallationAbgeschlossen,
        ]
    }

    /// Linear steps of the energy certificate flow
    pub fn ausweis_steps() -> [ProzessStatus; 4] {
        [
            ProzessStatus::DatenAngefordert,
            ProzessStatus::DatenFreigegeben,
            ProzessStatus::AusweisAngefordert,
            ProzessStatus::AusweisErstellt,
        ]
    }

    pub fn is_certificate_state(&self) -> bool {
        matches!(
            self,
            ProzessStatus::AusweisAngefordert | ProzessStatus::AusweisErstellt
        )
    }

    /// Position in the stepper the status belongs to
    pub fn step_index(&self) -> usize {
        if self.is_certificate_state() {
            Self::ausweis_steps()
                .iter()
                .position(|s| s == self)
                .unwrap_or(0)
        } else {
            Self::pv_steps().iter().position(|s| s == self).unwrap_or(0)
        }
    }

    /// Grid operator may approve once the installation plan exists
    pub fn awaits_grid_approval(&self) -> bool {
        *self == ProzessStatus::PlanErstellt
    }
}

impl std::fmt::Display for ProzessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_every_state() {
        for status in ProzessStatus::all() {
            assert_eq!(ProzessStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(ProzessStatus::parse("Storniert"), None);
        assert_eq!(ProzessStatus::parse(""), None);
        assert_eq!(ProzessStatus::parse(" Genehmigt "), Some(ProzessStatus::Genehmigt));
    }

    #[test]
    fn test_step_index() {
        assert_eq!(ProzessStatus::AnfrageGestellt.step_index(), 0);
        assert_eq!(ProzessStatus::InstallationAbgeschlossen.step_index(), 8);
        assert_eq!(ProzessStatus::AusweisErstellt.step_index(), 3);
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&ProzessStatus::AngebotAngenommen).unwrap();
        assert_eq!(json, "\"AngebotAngenommen\"");
    }
}
