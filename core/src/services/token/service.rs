//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT bearer tokens
///
/// The signing keys are derived once at construction and the secret is
/// read-only for the lifetime of the process.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // The expiry boundary is part of the client contract; no clock leeway.
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed token for an authenticated user
    ///
    /// Builds claims valid from now until now plus the configured TTL and
    /// signs them with the process-wide secret.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and its validity window
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue_token(&self, user: &User) -> DomainResult<IssuedToken> {
        let claims = Claims::new(user.id, self.config.token_ttl_minutes);
        let token = self.encode_jwt(&claims)?;

        Ok(IssuedToken::new(token, self.config.token_ttl_minutes))
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a bearer token and returns its claims
    ///
    /// Classification order is fixed: absence, then integrity, then expiry.
    /// Signature verification (constant-time, inside `jsonwebtoken`) always
    /// runs before the expiry check, so a tampered token reports
    /// `TokenInvalid` regardless of the expiry it claims to carry.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenAbsent)` - No token or a blank string
    /// * `Err(TokenError::TokenInvalid)` - Malformed token or bad signature
    /// * `Err(TokenError::TokenExpired)` - Integrity verified, window passed
    pub fn verify_token(&self, token: Option<&str>) -> DomainResult<Claims> {
        let token = match token {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(DomainError::Token(TokenError::TokenAbsent)),
        };

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    DomainError::Token(TokenError::TokenExpired)
                } else {
                    tracing::debug!(error = %e, "token rejected");
                    DomainError::Token(TokenError::TokenInvalid)
                }
            })?;

        Ok(token_data.claims)
    }
}
