//! Main registration service implementation

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AuthResponse, NewRegistration};
use crate::errors::DomainResult;
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasherTrait;
use crate::services::token::TokenService;

/// Registration service for account creation
pub struct RegistrationService<U, P>
where
    U: UserRepository,
    P: PasswordHasherTrait,
{
    /// User repository for store inserts
    user_repository: Arc<U>,
    /// Password hashing service
    password_hasher: Arc<P>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<U, P> RegistrationService<U, P>
where
    U: UserRepository,
    P: PasswordHasherTrait,
{
    /// Create a new registration service
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

    /// Registers a new account and signs the user in
    ///
    /// This method:
    /// 1. Hashes the password into a storable digest
    /// 2. Inserts the new user into the store
    /// 3. Issues a signed token so the user does not need a separate login
    ///
    /// Field validation happens at the transport boundary before this is
    /// called; the store's unique-email constraint is the last line of
    /// defense and surfaces as `EmailAlreadyRegistered`.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The created user and their first token
    /// * `Err(AuthError::EmailAlreadyRegistered)` - Email already taken
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub async fn register(&self, registration: &NewRegistration) -> DomainResult<AuthResponse> {
        let digest = self.password_hasher.hash(&registration.password)?;

        let user = User::new(
            registration.name.clone(),
            registration.email.clone(),
            digest,
        );
        let user = self.user_repository.create(user).await?;

        tracing::info!(user_id = %user.id, "registered new account");

        let issued = self.token_service.issue_token(&user)?;
        Ok(AuthResponse::new(user, issued))
    }
}
