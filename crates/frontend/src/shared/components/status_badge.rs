use contracts::enums::ProzessStatus;
use leptos::prelude::*;

/// CSS modifier of the badge for a status string
pub fn badge_class(status: &str) -> &'static str {
    match ProzessStatus::parse(status) {
        Some(ProzessStatus::InstallationAbgeschlossen)
        | Some(ProzessStatus::Abgenommen)
        | Some(ProzessStatus::AusweisErstellt) => "badge badge--success",
        Some(ProzessStatus::Genehmigt) | Some(ProzessStatus::AngebotAngenommen) => {
            "badge badge--primary"
        }
        Some(ProzessStatus::DatenAngefordert) | Some(ProzessStatus::AusweisAngefordert) => {
            "badge badge--warning"
        }
        Some(_) => "badge badge--neutral",
        None => "badge badge--error",
    }
}

/// Label of a status string; unknown strings are shown as sent
pub fn status_text(status: &str) -> String {
    ProzessStatus::parse(status)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| status.to_string())
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    view! { <span class=badge_class(&status)>{status_text(&status)}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_is_shown_raw() {
        assert_eq!(status_text("Storniert"), "Storniert");
        assert_eq!(badge_class("Storniert"), "badge badge--error");
        assert_eq!(status_text("Genehmigt"), "Vom Netzbetreiber genehmigt");
    }
}
