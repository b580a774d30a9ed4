use contracts::domain::a008_vertrag::Vertrag;
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_vertraege(client: &ApiClient) -> Result<Vec<Vertrag>, ApiError> {
    client.get_json(endpoints::VERTRAEGE).await
}

pub async fn fetch_vertrag(client: &ApiClient, vertrag_id: i64) -> Result<Vertrag, ApiError> {
    client.get_json(&endpoints::vertrag(vertrag_id)).await
}
