use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::shared::validation::{optional_text, FieldErrors, FormValidate, ValidationRules};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub role: UserRole,
}

/// Raw input of the "Benutzer anlegen" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateUserForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
}

impl FormValidate for CreateUserForm {
    type Output = CreateUserDto;

    fn validate(&self) -> Result<CreateUserDto, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check(
            "username",
            ValidationRules::required()
                .with_max_length(64)
                .validate_string(&self.username, "Benutzername"),
        );
        errors.check(
            "password",
            ValidationRules {
                min_length: Some(8),
                ..ValidationRules::required()
            }
            .validate_string(&self.password, "Passwort"),
        );
        if let Some(email) = optional_text(&self.email) {
            if !email.contains('@') {
                errors.insert("email", "E-Mail-Adresse ist ungültig");
            }
        }
        let role = errors.check(
            "role",
            UserRole::from_code(&self.role).ok_or_else(|| "Bitte eine Rolle wählen".to_string()),
        );

        match role {
            Some(role) if errors.is_empty() => Ok(CreateUserDto {
                username: self.username.trim().to_string(),
                password: self.password.clone(),
                email: optional_text(&self.email),
                full_name: optional_text(&self.full_name),
                role,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_form() {
        let form = CreateUserForm {
            username: " schulz ".into(),
            password: "geheim123".into(),
            email: "".into(),
            full_name: "Anna Schulz".into(),
            role: "SOLARTEUR".into(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.username, "schulz");
        assert_eq!(dto.email, None);
        assert_eq!(dto.role, UserRole::Solarteur);
    }

    #[test]
    fn test_invalid_user_form_collects_errors() {
        let form = CreateUserForm {
            username: "".into(),
            password: "kurz".into(),
            email: "ohne-at".into(),
            full_name: "".into(),
            role: "".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.get("password").is_some());
    }
}
