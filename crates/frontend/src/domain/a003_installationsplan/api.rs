use contracts::domain::a003_installationsplan::{InstallationsPlan, InstallationsPlanDto};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

/// 404 until the installer created the plan
pub async fn fetch_plan(client: &ApiClient, anlage_id: i64) -> Result<InstallationsPlan, ApiError> {
    client.get_json(&endpoints::installationsplan(anlage_id)).await
}

pub async fn create_plan(
    client: &ApiClient,
    anlage_id: i64,
    dto: &InstallationsPlanDto,
) -> Result<(), ApiError> {
    client.post(&endpoints::installationsplan(anlage_id), dto).await
}
