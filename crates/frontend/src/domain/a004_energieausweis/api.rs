use contracts::domain::a004_energieausweis::{
    AusweisAnfrage, CreateAusweisAnfrageDto, EnergieausweisDto,
};
use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;

use crate::shared::api_utils::ApiClient;

/// Requests of the household, or those assigned to the consultant
pub async fn fetch_anfragen(client: &ApiClient) -> Result<Vec<AusweisAnfrage>, ApiError> {
    client.get_json(endpoints::AUSWEIS_ANFRAGEN).await
}

pub async fn fetch_anfrage(client: &ApiClient, anfrage_id: i64) -> Result<AusweisAnfrage, ApiError> {
    client.get_json(&endpoints::ausweis_anfrage(anfrage_id)).await
}

pub async fn anfrage_stellen(
    client: &ApiClient,
    haushalt_id: i64,
    dto: &CreateAusweisAnfrageDto,
) -> Result<AusweisAnfrage, ApiError> {
    client
        .post_json(&endpoints::ausweis_anfrage_stellen(haushalt_id), dto)
        .await
}

pub async fn create_energieausweis(
    client: &ApiClient,
    anfrage_id: i64,
    dto: &EnergieausweisDto,
) -> Result<(), ApiError> {
    client.post(&endpoints::energieausweis(anfrage_id), dto).await
}
