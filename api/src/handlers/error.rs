//! Domain-error to HTTP response mapping
//!
//! Every failure is turned into a structured `ErrorResponse` whose `error`
//! field is a stable machine-readable code; clients branch on the code, not
//! on the message or the status line. The table:
//!
//! | condition                   | code                       | status |
//! |-----------------------------|----------------------------|--------|
//! | invalid credentials         | `invalid_credentials`      | 400    |
//! | request validation failure  | `validation_error`         | 400    |
//! | token absent                | `token_absent`             | 401    |
//! | token invalid               | `token_invalid`            | 401    |
//! | token expired               | `token_expired`            | 401    |
//! | token subject deleted       | `user_not_found`           | 404    |
//! | duplicate email at store    | `email_already_registered` | 500    |
//! | token generation failed     | `token_creation_failed`    | 500    |
//! | database failure            | `database_error`           | 500    |
//! | other internal failure      | `internal_error`           | 500    |

use std::collections::HashMap;

use actix_web::{http::StatusCode, HttpResponse};

use gate_core::errors::{AuthError, DomainError, TokenError};
use gate_shared::types::ErrorResponse;

/// Convert a domain error into its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::debug!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => {
            let status = match auth_error {
                AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::EmailAlreadyRegistered => StatusCode::INTERNAL_SERVER_ERROR,
            };
            HttpResponse::build(status).json(ErrorResponse::from(auth_error))
        }
        DomainError::Token(token_error) => {
            let status = match token_error {
                TokenError::TokenAbsent | TokenError::TokenInvalid | TokenError::TokenExpired => {
                    StatusCode::UNAUTHORIZED
                }
                TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            };
            HttpResponse::build(status).json(ErrorResponse::from(token_error))
        }
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("database_error", "A database error occurred"))
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "An internal error occurred"))
        }
    }
}

/// Convert request-validation failures into a 400 response
pub fn validation_failure(errors: validator::ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    details.insert("validation_errors".to_string(), serde_json::json!(errors));

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_statuses() {
        let response = handle_domain_error(DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = handle_domain_error(DomainError::Auth(AuthError::UserNotFound));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = handle_domain_error(DomainError::Auth(AuthError::EmailAlreadyRegistered));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_token_error_statuses() {
        for token_error in [
            TokenError::TokenAbsent,
            TokenError::TokenInvalid,
            TokenError::TokenExpired,
        ] {
            let response = handle_domain_error(DomainError::Token(token_error));
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let response = handle_domain_error(DomainError::Token(TokenError::TokenGenerationFailed));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_details_never_leak() {
        let response = handle_domain_error(DomainError::Database {
            message: "connection refused to mysql://internal-host".to_string(),
        });

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
