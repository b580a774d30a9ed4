use contracts::domain::a009_smart_meter::{MeterMetric, MeterSeries, UploadResult};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;
use web_sys::FormData;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_metric(
    client: &ApiClient,
    haushalt_id: i64,
    metric: MeterMetric,
) -> Result<MeterSeries, ApiError> {
    client
        .get_json(&endpoints::smart_meter(haushalt_id, metric.slug()))
        .await
}

pub async fn upload_csv(
    client: &ApiClient,
    user_id: &str,
    form: FormData,
) -> Result<UploadResult, ApiError> {
    client
        .post_multipart(&endpoints::smart_meter_upload(user_id), form)
        .await
}
