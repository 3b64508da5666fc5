//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default token lifetime (60 minutes)
pub const TOKEN_TTL_MINUTES: i64 = 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "gatehouse";

/// JWT audience
pub const JWT_AUDIENCE: &str = "gatehouse-api";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for a token issued now
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `ttl_minutes` - Lifetime of the token in minutes
    pub fn new(user_id: Uuid, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Signed token returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Compact JWT encoding
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl IssuedToken {
    /// Creates a new issued token with its validity window
    pub fn new(token: String, ttl_minutes: i64) -> Self {
        Self {
            token,
            expires_in: ttl_minutes * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, TOKEN_TTL_MINUTES);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_MINUTES * 60);
        assert!(claims.exp > claims.iat);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, TOKEN_TTL_MINUTES);

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new(Uuid::new_v4(), TOKEN_TTL_MINUTES);

        // Force expiration into the past
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_unique_jti_per_token() {
        let user_id = Uuid::new_v4();
        let first = Claims::new(user_id, TOKEN_TTL_MINUTES);
        let second = Claims::new(user_id, TOKEN_TTL_MINUTES);

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_issued_token_expiry_seconds() {
        let issued = IssuedToken::new("signed.jwt.token".to_string(), 60);

        assert_eq!(issued.token, "signed.jwt.token");
        assert_eq!(issued.expires_in, 3600);
    }
}
