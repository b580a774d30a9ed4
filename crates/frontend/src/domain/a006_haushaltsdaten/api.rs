use contracts::domain::a006_haushaltsdaten::{DatenFreigabe, Haushaltsdaten, HaushaltsdatenDto};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

/// 404 when the household never entered its data, 412 while a release is pending
pub async fn fetch_haushaltsdaten(
    client: &ApiClient,
    haushalt_id: i64,
) -> Result<Haushaltsdaten, ApiError> {
    client.get_json(&endpoints::haushaltsdaten(haushalt_id)).await
}

pub async fn save_haushaltsdaten(
    client: &ApiClient,
    haushalt_id: i64,
    dto: &HaushaltsdatenDto,
) -> Result<(), ApiError> {
    client.put(&endpoints::haushaltsdaten(haushalt_id), dto).await
}

pub async fn fetch_freigaben(
    client: &ApiClient,
    haushalt_id: i64,
) -> Result<Vec<DatenFreigabe>, ApiError> {
    client.get_json(&endpoints::freigaben(haushalt_id)).await
}

pub async fn freigabe_erteilen(client: &ApiClient, freigabe_id: i64) -> Result<(), ApiError> {
    client.post_empty(&endpoints::freigabe_erteilen(freigabe_id)).await
}
