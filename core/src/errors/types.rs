//! Error types for authentication and token handling
//!
//! Every variant maps to a stable machine-readable code via the
//! `ErrorResponse` conversions below; clients branch on those codes, so
//! the mapping is part of the public contract.

use gate_shared::types::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable so callers cannot probe which addresses exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A verified token pointed at a user that no longer exists
    #[error("User not found")]
    UserNotFound,

    /// The store rejected an insert on its unique email index
    #[error("Email already registered")]
    EmailAlreadyRegistered,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Integrity verified, but the validity window has passed
    #[error("Token expired")]
    TokenExpired,

    /// Malformed structure, bad encoding, or signature mismatch
    #[error("Token invalid")]
    TokenInvalid,

    /// No token was presented
    #[error("Token absent")]
    TokenAbsent,

    /// Signing failed; a systemic fault, not a user error
    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::UserNotFound => "user_not_found",
            AuthError::EmailAlreadyRegistered => "email_already_registered",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => "token_expired",
            TokenError::TokenInvalid => "token_invalid",
            TokenError::TokenAbsent => "token_absent",
            TokenError::TokenGenerationFailed => "token_creation_failed",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_codes() {
        let response: ErrorResponse = AuthError::InvalidCredentials.into();
        assert_eq!(response.error, "invalid_credentials");

        let response: ErrorResponse = AuthError::UserNotFound.into();
        assert_eq!(response.error, "user_not_found");
    }

    #[test]
    fn test_token_error_codes() {
        let response: ErrorResponse = TokenError::TokenExpired.into();
        assert_eq!(response.error, "token_expired");
        assert!(response.message.contains("expired"));

        let response: ErrorResponse = TokenError::TokenInvalid.into();
        assert_eq!(response.error, "token_invalid");

        let response: ErrorResponse = TokenError::TokenAbsent.into();
        assert_eq!(response.error, "token_absent");

        let response: ErrorResponse = TokenError::TokenGenerationFailed.into();
        assert_eq!(response.error, "token_creation_failed");
    }
}
