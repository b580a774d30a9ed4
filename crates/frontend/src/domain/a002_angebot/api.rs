use contracts::domain::a002_angebot::{Angebot, AngebotDto};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_angebote(client: &ApiClient, anlage_id: i64) -> Result<Vec<Angebot>, ApiError> {
    client.get_json(&endpoints::angebote(anlage_id)).await
}

/// Moves the application to `AngebotGemacht`
pub async fn create_angebot(
    client: &ApiClient,
    anlage_id: i64,
    dto: &AngebotDto,
) -> Result<(), ApiError> {
    client.post(&endpoints::angebote(anlage_id), dto).await
}

pub async fn angebot_annehmen(client: &ApiClient, angebot_id: i64) -> Result<(), ApiError> {
    client.put_empty(&endpoints::angebot_annehmen(angebot_id)).await
}
