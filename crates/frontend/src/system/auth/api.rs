use contracts::shared::api_error::ApiError;
use contracts::shared::endpoints;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::ApiClient;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    ApiClient::anonymous()
        .post_json(endpoints::LOGIN, &request)
        .await
}

/// Get current user info; fails with `Authentication` when the token expired
pub async fn get_current_user(client: &ApiClient) -> Result<UserInfo, ApiError> {
    client.get_json(endpoints::CURRENT_USER).await
}
