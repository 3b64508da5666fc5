use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use gate_core::domain::entities::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    // 72 bytes is bcrypt's effective input limit
    #[validate(length(min = 6, max = 72))]
    pub password: String,
    #[validate(must_match(other = "password"))]
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_in: i64,
}

/// User representation on the wire; never carries the digest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserDto,
    pub token: String,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "a@a.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let empty_password = LoginRequest {
            email: "a@a.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret1".to_string(),
        };
        assert!(valid.validate().is_ok());
    }

    #[test]
    fn test_register_request_short_password() {
        let request = RegisterRequest {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            password: "short".to_string(),
            password_confirmation: "short".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_mismatched_confirmation() {
        let request = RegisterRequest {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            password: "secret1".to_string(),
            password_confirmation: "secret2".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_dto_from_entity() {
        let user = User::new(
            "A".to_string(),
            "a@a.com".to_string(),
            "digest".to_string(),
        );
        let dto = UserDto::from(user.clone());

        assert_eq!(dto.id, user.id);
        assert_eq!(dto.email, "a@a.com");

        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("digest"));
    }
}
