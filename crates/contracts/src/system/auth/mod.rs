use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Identity of the signed in user. The numeric ids link the account to the
/// household or company record it acts for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: UserRole,
    pub haushalt_id: Option<i64>,
    pub solarteur_id: Option<i64>,
    pub energieberater_id: Option<i64>,
    pub netzbetreiber_id: Option<i64>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses() {
        let json = r#"{
            "access_token": "abc",
            "user": {
                "id": "u-1",
                "username": "meier",
                "full_name": null,
                "email": "meier@example.org",
                "role": "HAUSHALT",
                "haushalt_id": 42,
                "solarteur_id": null,
                "energieberater_id": null,
                "netzbetreiber_id": null
            }
        }"#;
        let parsed: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.role, UserRole::Haushalt);
        assert_eq!(parsed.user.haushalt_id, Some(42));
        assert_eq!(parsed.user.display_name(), "meier");
    }
}
