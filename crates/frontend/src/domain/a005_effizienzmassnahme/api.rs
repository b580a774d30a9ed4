use contracts::domain::a005_effizienzmassnahme::EffizienzmassnahmeDto;
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

/// All measures of the renovation plan in one request
pub async fn create_massnahmen(
    client: &ApiClient,
    anfrage_id: i64,
    massnahmen: &[EffizienzmassnahmeDto],
) -> Result<(), ApiError> {
    client.post(&endpoints::massnahmen(anfrage_id), &massnahmen).await
}
