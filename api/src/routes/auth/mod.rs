//! Authentication route handlers
//!
//! This module contains all authentication-related endpoints:
//! - `POST /api/v1/auth/register` - account creation
//! - `POST /api/v1/auth/login` - credential authentication
//! - `GET /api/v1/auth/me` - bearer-token identity resolution

pub mod login;
pub mod me;
pub mod register;

use std::sync::Arc;

use gate_core::repositories::UserRepository;
use gate_core::services::auth::AuthService;
use gate_core::services::password::PasswordHasherTrait;
use gate_core::services::registration::RegistrationService;

/// Application state that holds the shared services
pub struct AppState<U, P>
where
    U: UserRepository,
    P: PasswordHasherTrait,
{
    pub auth_service: Arc<AuthService<U, P>>,
    pub registration_service: Arc<RegistrationService<U, P>>,
}
