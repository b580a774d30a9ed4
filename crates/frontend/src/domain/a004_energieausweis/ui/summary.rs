use contracts::domain::a004_energieausweis::AusweisAnfrage;
use leptos::prelude::*;

use crate::shared::components::status_badge::StatusBadge;
use crate::shared::format::format_iso_date;

#[component]
pub fn AnfrageSummary(anfrage: AusweisAnfrage) -> impl IntoView {
    let erstellt = anfrage
        .erstellt_am
        .as_deref()
        .map(format_iso_date)
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="summary">
            <h3 class="summary__title">"Anfrage Energieausweis"</h3>
            <dl class="summary__grid">
                <dt>"Anfrage"</dt>
                <dd>{format!("#{}", anfrage.anfrage_id)}</dd>
                <dt>"Haushalt"</dt>
                <dd>{format!("#{}", anfrage.haushalt_id)}</dd>
                <dt>"Status"</dt>
                <dd><StatusBadge status=anfrage.prozess_status.clone() /></dd>
                <dt>"Erstellt am"</dt>
                <dd>{erstellt}</dd>
                <dt>"Bemerkung"</dt>
                <dd>{anfrage.bemerkung.clone().unwrap_or_else(|| "-".to_string())}</dd>
            </dl>
        </div>
    }
}
