//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, Credentials};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasherTrait;
use crate::services::token::TokenService;

/// Authentication service for login and token-based identity resolution
///
/// Constructed once at startup with injected collaborators; every call is
/// request-scoped and side-effect-free apart from store reads.
pub struct AuthService<U, P>
where
    U: UserRepository,
    P: PasswordHasherTrait,
{
    /// User repository for store lookups
    user_repository: Arc<U>,
    /// Password hashing service
    password_hasher: Arc<P>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<U, P> AuthService<U, P>
where
    U: UserRepository,
    P: PasswordHasherTrait,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `password_hasher` - Service for password digest verification
    /// * `token_service` - Service for JWT management
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<P>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
        }
    }

    /// Authenticates a user with email and password
    ///
    /// This method:
    /// 1. Looks up the user by email
    /// 2. Verifies the password against the stored digest
    /// 3. Issues a signed token for the user
    ///
    /// An unknown email and a wrong password produce the same
    /// `InvalidCredentials` outcome, so callers cannot probe which
    /// addresses are registered.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The user and their freshly issued token
    /// * `Err(AuthError::InvalidCredentials)` - Lookup or verification failed
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub async fn authenticate(&self, credentials: &Credentials) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_email(&credentials.email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("login rejected: unknown email");
                return Err(DomainError::Auth(AuthError::InvalidCredentials));
            }
        };

        if !self
            .password_hasher
            .verify(&credentials.secret, &user.password_hash)?
        {
            tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }

        let issued = self.token_service.issue_token(&user)?;
        Ok(AuthResponse::new(user, issued))
    }

    /// Resolves a bearer token to the user it was issued for
    ///
    /// Token-state failures (`TokenAbsent`, `TokenInvalid`, `TokenExpired`)
    /// propagate unchanged. A token whose subject no longer exists yields
    /// `UserNotFound`: a deleted identity is never resurrected by a
    /// still-valid token.
    pub async fn authenticated_user(&self, token: Option<&str>) -> DomainResult<User> {
        let claims = self.token_service.verify_token(token)?;

        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::TokenInvalid))?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }
}
