use contracts::domain::a001_pv_antrag::PvAntrag;
use contracts::domain::a006_haushaltsdaten::Haushaltsdaten;
use leptos::prelude::*;

use crate::domain::a006_haushaltsdaten::ui::summary::HaushaltsdatenSummary;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::format_iso_date;

/// Read-only application + household summary
#[component]
pub fn AntragSummary(antrag: PvAntrag, daten: Option<Haushaltsdaten>) -> impl IntoView {
    let solarteur = antrag
        .solarteur_id
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "noch nicht zugeordnet".to_string());
    let erstellt = antrag
        .erstellt_am
        .as_deref()
        .map(format_iso_date)
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="summary-group">
            <div class="summary">
                <h3 class="summary__title">"Antrag"</h3>
                <dl class="summary__grid">
                    <dt>"Anlage"</dt>
                    <dd>{format!("#{}", antrag.anlage_id)}</dd>
                    <dt>"Status"</dt>
                    <dd><StatusBadge status=antrag.prozess_status.clone() /></dd>
                    <dt>"Adresse"</dt>
                    <dd>{antrag.adresse.clone().unwrap_or_else(|| "-".to_string())}</dd>
                    <dt>"Solarteur"</dt>
                    <dd>{solarteur}</dd>
                    <dt>"Netzverträglichkeit geprüft"</dt>
                    <dd>{if antrag.nvp_pruefung { "Ja" } else { "Nein" }}</dd>
                    <dt>"Erstellt am"</dt>
                    <dd>{erstellt}</dd>
                </dl>
            </div>
            <HaushaltsdatenSummary daten=daten />
        </div>
    }
}
