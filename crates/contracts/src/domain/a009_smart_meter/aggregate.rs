use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four metrics shown on the smart meter overview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeterMetric {
    Verbrauch,
    Erzeugung,
    Einspeisung,
    Kosten,
}

impl MeterMetric {
    pub fn all() -> [MeterMetric; 4] {
        [
            MeterMetric::Verbrauch,
            MeterMetric::Erzeugung,
            MeterMetric::Einspeisung,
            MeterMetric::Kosten,
        ]
    }

    /// Path segment of the metric endpoint
    pub fn slug(&self) -> &'static str {
        match self {
            MeterMetric::Verbrauch => "verbrauch",
            MeterMetric::Erzeugung => "erzeugung",
            MeterMetric::Einspeisung => "einspeisung",
            MeterMetric::Kosten => "kosten",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeterMetric::Verbrauch => "Verbrauch",
            MeterMetric::Erzeugung => "PV-Erzeugung",
            MeterMetric::Einspeisung => "Netzeinspeisung",
            MeterMetric::Kosten => "Stromkosten",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MeterMetric::Kosten => "€",
            _ => "kWh",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterPoint {
    pub zeitpunkt: DateTime<Utc>,
    pub wert: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterSeries {
    pub metric: MeterMetric,
    pub punkte: Vec<MeterPoint>,
}

impl MeterSeries {
    pub fn total(&self) -> f64 {
        self.punkte.iter().map(|p| p.wert).sum()
    }

    pub fn peak(&self) -> Option<&MeterPoint> {
        self.punkte
            .iter()
            .max_by(|a, b| a.wert.total_cmp(&b.wert))
    }
}

/// Self-consumption share of the PV production in percent
pub fn eigenverbrauchsquote(erzeugung: &MeterSeries, einspeisung: &MeterSeries) -> Option<f64> {
    let produced = erzeugung.total();
    if produced <= 0.0 {
        return None;
    }
    let fed_in = einspeisung.total().min(produced);
    Some((produced - fed_in) / produced * 100.0)
}

/// Loading flags of the four parallel metric requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterLoadState {
    flags: [bool; 4],
}

impl MeterLoadState {
    /// All four requests in flight
    pub fn started() -> Self {
        Self { flags: [true; 4] }
    }

    pub fn finish(&mut self, metric: MeterMetric) {
        if let Some(idx) = MeterMetric::all().iter().position(|m| *m == metric) {
            self.flags[idx] = false;
        }
    }

    pub fn is_loading(&self, metric: MeterMetric) -> bool {
        MeterMetric::all()
            .iter()
            .position(|m| *m == metric)
            .map(|idx| self.flags[idx])
            .unwrap_or(false)
    }

    /// Page-level flag: true until every metric finished
    pub fn any_loading(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }
}

/// Response of the CSV upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub importierte_zeilen: u32,
    #[serde(default)]
    pub fehler: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn series(metric: MeterMetric, values: &[f64]) -> MeterSeries {
        MeterSeries {
            metric,
            punkte: values
                .iter()
                .enumerate()
                .map(|(i, v)| MeterPoint {
                    zeitpunkt: Utc.with_ymd_and_hms(2026, 10, 1 + i as u32, 0, 0, 0).unwrap(),
                    wert: *v,
                })
                .collect(),
        }
    }

    #[test]
    fn test_page_loading_until_all_four_finished() {
        let mut state = MeterLoadState::started();
        for metric in [MeterMetric::Kosten, MeterMetric::Verbrauch, MeterMetric::Erzeugung] {
            state.finish(metric);
            assert!(state.any_loading());
        }
        assert!(state.is_loading(MeterMetric::Einspeisung));
        state.finish(MeterMetric::Einspeisung);
        assert!(!state.any_loading());
    }

    #[test]
    fn test_series_total_and_peak() {
        let s = series(MeterMetric::Verbrauch, &[8.0, 12.5, 9.5]);
        assert_eq!(s.total(), 30.0);
        assert_eq!(s.peak().map(|p| p.wert), Some(12.5));
    }

    #[test]
    fn test_self_consumption_rate() {
        let erzeugung = series(MeterMetric::Erzeugung, &[20.0, 20.0]);
        let einspeisung = series(MeterMetric::Einspeisung, &[10.0]);
        assert_eq!(eigenverbrauchsquote(&erzeugung, &einspeisung), Some(75.0));
        let leer = series(MeterMetric::Erzeugung, &[]);
        assert_eq!(eigenverbrauchsquote(&leer, &einspeisung), None);
    }
}
