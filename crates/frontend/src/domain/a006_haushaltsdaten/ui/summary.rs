use contracts::domain::a006_haushaltsdaten::Haushaltsdaten;
use leptos::prelude::*;

use crate::shared::format::format_number;

/// Read-only household data block of the summary views
#[component]
pub fn HaushaltsdatenSummary(daten: Option<Haushaltsdaten>) -> impl IntoView {
    let Some(d) = daten else {
        return view! {
            <div class="summary summary--empty">"Keine Haushaltsdaten verfügbar."</div>
        }
        .into_any();
    };

    let rows: Vec<(&'static str, String)> = vec![
        ("Bewohner", d.bewohner.to_string()),
        ("Heizungsart", d.heizungsart.label().to_string()),
        ("Baujahr", d.baujahr.to_string()),
        ("Wohnfläche", format!("{} m²", format_number(d.wohnflaeche_m2, 1))),
        ("Dämmung", d.daemmqualitaet.label().to_string()),
        ("Dachausrichtung", d.dachausrichtung.label().to_string()),
        ("Dachfläche", format!("{} m²", format_number(d.dachflaeche_m2, 1))),
        (
            "Effizienzklasse",
            d.effizienzklasse
                .map(|k| k.code().to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
    ];

    view! {
        <div class="summary">
            <h3 class="summary__title">"Haushaltsdaten"</h3>
            <dl class="summary__grid">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    })
                    .collect_view()}
            </dl>
        </div>
    }
    .into_any()
}
