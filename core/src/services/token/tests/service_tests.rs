//! Unit tests for the token service

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::default())
}

fn test_user() -> User {
    User::new(
        "Test User".to_string(),
        "user@example.com".to_string(),
        "digest".to_string(),
    )
}

/// Rewrites one character of the given dot-separated token segment.
fn corrupt_segment(token: &str, segment: usize) -> String {
    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let target = &mut parts[segment];
    let flipped = if target.starts_with('A') { "B" } else { "A" };
    target.replace_range(0..1, flipped);
    parts.join(".")
}

#[test]
fn test_issue_token() {
    let service = create_test_service();
    let user = test_user();

    let issued = service.issue_token(&user).unwrap();

    assert!(!issued.token.is_empty());
    assert_eq!(issued.expires_in, 60 * 60);
}

#[test]
fn test_issue_verify_round_trip() {
    let service = create_test_service();
    let user = test_user();

    let issued = service.issue_token(&user).unwrap();
    let claims = service.verify_token(Some(&issued.token)).unwrap();

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.aud, JWT_AUDIENCE);
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_verify_absent_token() {
    let service = create_test_service();

    for input in [None, Some(""), Some("   ")] {
        let result = service.verify_token(input);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::TokenAbsent))
        ));
    }
}

#[test]
fn test_verify_garbage_token() {
    let service = create_test_service();

    let result = service.verify_token(Some("not-a-jwt"));
    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));
}

#[test]
fn test_verify_tampered_payload() {
    let service = create_test_service();
    let issued = service.issue_token(&test_user()).unwrap();

    let tampered = corrupt_segment(&issued.token, 1);
    let result = service.verify_token(Some(&tampered));

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));
}

#[test]
fn test_verify_tampered_signature() {
    let service = create_test_service();
    let issued = service.issue_token(&test_user()).unwrap();

    let tampered = corrupt_segment(&issued.token, 2);
    let result = service.verify_token(Some(&tampered));

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));
}

#[test]
fn test_expired_token_reports_expired_not_invalid() {
    let service = create_test_service();
    let user = test_user();

    let mut claims = Claims::new(user.id, 60);
    claims.iat = Utc::now().timestamp() - 7200;
    claims.nbf = claims.iat;
    claims.exp = Utc::now().timestamp() - 3600;

    let token = service.encode_jwt(&claims).unwrap();
    let result = service.verify_token(Some(&token));

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_forged_token_with_future_expiry_is_invalid() {
    let service = create_test_service();
    let attacker_service = TokenService::new(TokenServiceConfig {
        jwt_secret: "attacker-controlled-secret".to_string(),
        ..TokenServiceConfig::default()
    });

    // Signed with the wrong key and a generous expiry; integrity verification
    // must win over the expiry the forger wrote into the claims.
    let mut claims = Claims::new(test_user().id, 60);
    claims.exp = Utc::now().timestamp() + 10 * 365 * 24 * 3600;

    let forged = attacker_service.encode_jwt(&claims).unwrap();
    let result = service.verify_token(Some(&forged));

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));
}

#[test]
fn test_wrong_issuer_rejected() {
    let service = create_test_service();

    let mut claims = Claims::new(test_user().id, 60);
    claims.iss = "someone-else".to_string();

    let token = service.encode_jwt(&claims).unwrap();
    let result = service.verify_token(Some(&token));

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));
}
