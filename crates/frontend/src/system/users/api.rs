use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;
use contracts::system::users::{CreateUserDto, User};

use crate::shared::api_utils::ApiClient;

pub async fn fetch_users(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get_json(endpoints::ADMIN_BENUTZER).await
}

pub async fn create_user(client: &ApiClient, dto: &CreateUserDto) -> Result<User, ApiError> {
    client.post_json(endpoints::ADMIN_BENUTZER, dto).await
}
