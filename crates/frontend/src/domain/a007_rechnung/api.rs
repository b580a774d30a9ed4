use contracts::domain::a007_rechnung::{Rechnung, RechnungFilter};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_rechnungen(
    client: &ApiClient,
    filter: &RechnungFilter,
) -> Result<Vec<Rechnung>, ApiError> {
    client.get_json_with_query(endpoints::RECHNUNGEN, filter).await
}

pub async fn bezahlen(client: &ApiClient, rechnung_id: i64) -> Result<(), ApiError> {
    client.post_empty(&endpoints::rechnung_bezahlen(rechnung_id)).await
}
