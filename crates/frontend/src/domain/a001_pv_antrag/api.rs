use contracts::domain::a001_pv_antrag::{AbnahmeDto, CreatePvAntragDto, GenehmigungDto, PvAntrag};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

/// Applications visible to the signed in user; the backend scopes by role
pub async fn fetch_antraege(client: &ApiClient) -> Result<Vec<PvAntrag>, ApiError> {
    client.get_json(endpoints::ANTRAEGE).await
}

pub async fn fetch_antrag(client: &ApiClient, anlage_id: i64) -> Result<PvAntrag, ApiError> {
    client.get_json(&endpoints::antrag(anlage_id)).await
}

pub async fn create_antrag(client: &ApiClient, dto: &CreatePvAntragDto) -> Result<PvAntrag, ApiError> {
    client.post_json(endpoints::ANTRAEGE, dto).await
}

pub async fn genehmigen(
    client: &ApiClient,
    anlage_id: i64,
    dto: &GenehmigungDto,
) -> Result<(), ApiError> {
    client.post(&endpoints::genehmigung(anlage_id), dto).await
}

pub async fn abnahme(client: &ApiClient, anlage_id: i64, dto: &AbnahmeDto) -> Result<(), ApiError> {
    client.post(&endpoints::abnahme(anlage_id), dto).await
}
