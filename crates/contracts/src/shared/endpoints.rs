//! REST paths of the backend. One function per query or action, relative to
//! the API base.

pub const LOGIN: &str = "/api/auth/login";
pub const CURRENT_USER: &str = "/api/auth/me";

pub const ANTRAEGE: &str = "/api/antraege";
pub const AUSWEIS_ANFRAGEN: &str = "/api/ausweis-anfragen";
pub const RECHNUNGEN: &str = "/api/rechnungen";
pub const VERTRAEGE: &str = "/api/vertraege";
pub const ADMIN_BENUTZER: &str = "/api/admin/benutzer";

pub fn antrag(anlage_id: i64) -> String {
    format!("{}/{}", ANTRAEGE, anlage_id)
}

pub fn daten_anfordern(anlage_id: i64) -> String {
    format!("{}/{}/daten-anfordern", ANTRAEGE, anlage_id)
}

pub fn angebote(anlage_id: i64) -> String {
    format!("{}/{}/angebote", ANTRAEGE, anlage_id)
}

pub fn angebot_annehmen(angebot_id: i64) -> String {
    format!("/api/angebote/{}/annehmen", angebot_id)
}

pub fn installationsplan(anlage_id: i64) -> String {
    format!("{}/{}/installationsplan", ANTRAEGE, anlage_id)
}

pub fn genehmigung(anlage_id: i64) -> String {
    format!("{}/{}/genehmigung", ANTRAEGE, anlage_id)
}

pub fn abnahme(anlage_id: i64) -> String {
    format!("{}/{}/abnahme", ANTRAEGE, anlage_id)
}

pub fn haushaltsdaten(haushalt_id: i64) -> String {
    format!("/api/haushalte/{}/daten", haushalt_id)
}

pub fn freigaben(haushalt_id: i64) -> String {
    format!("/api/haushalte/{}/freigaben", haushalt_id)
}

pub fn freigabe_erteilen(freigabe_id: i64) -> String {
    format!("/api/freigaben/{}/erteilen", freigabe_id)
}

pub fn ausweis_anfrage(anfrage_id: i64) -> String {
    format!("{}/{}", AUSWEIS_ANFRAGEN, anfrage_id)
}

pub fn ausweis_anfrage_stellen(haushalt_id: i64) -> String {
    format!("/api/haushalte/{}/ausweis-anfragen", haushalt_id)
}

pub fn ausweis_daten_anfordern(anfrage_id: i64) -> String {
    format!("{}/{}/daten-anfordern", AUSWEIS_ANFRAGEN, anfrage_id)
}

pub fn energieausweis(anfrage_id: i64) -> String {
    format!("{}/{}/energieausweis", AUSWEIS_ANFRAGEN, anfrage_id)
}

pub fn massnahmen(anfrage_id: i64) -> String {
    format!("{}/{}/massnahmen", AUSWEIS_ANFRAGEN, anfrage_id)
}

pub fn rechnung_bezahlen(rechnung_id: i64) -> String {
    format!("{}/{}/bezahlen", RECHNUNGEN, rechnung_id)
}

pub fn vertrag(vertrag_id: i64) -> String {
    format!("{}/{}", VERTRAEGE, vertrag_id)
}

pub fn smart_meter(haushalt_id: i64, metric_slug: &str) -> String {
    format!("/api/smartmeter/{}/{}", haushalt_id, metric_slug)
}

pub fn smart_meter_upload(user_id: &str) -> String {
    format!("/api/smartmeter/upload/{}", urlencoding::encode(user_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(angebote(7), "/api/antraege/7/angebote");
        assert_eq!(haushaltsdaten(3), "/api/haushalte/3/daten");
        assert_eq!(energieausweis(12), "/api/ausweis-anfragen/12/energieausweis");
        assert_eq!(smart_meter(5, "verbrauch"), "/api/smartmeter/5/verbrauch");
    }

    #[test]
    fn test_upload_path_is_encoded() {
        assert_eq!(smart_meter_upload("u 1/2"), "/api/smartmeter/upload/u%201%2F2");
    }
}
