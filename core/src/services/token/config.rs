//! Configuration for the token service

use jsonwebtoken::Algorithm;

use gate_shared::config::JwtConfig;

use crate::domain::entities::token::TOKEN_TTL_MINUTES;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in minutes
    pub token_ttl_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            token_ttl_minutes: TOKEN_TTL_MINUTES,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        let algorithm = match config.algorithm.as_str() {
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            _ => Algorithm::HS256,
        };

        Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            token_ttl_minutes: config.token_ttl_minutes,
        }
    }
}
