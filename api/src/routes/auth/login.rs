use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, TokenResponse};
use crate::handlers::error::{handle_domain_error, validation_failure};

use gate_core::domain::value_objects::Credentials;
use gate_core::repositories::UserRepository;
use gate_core::services::password::PasswordHasherTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Verifies email/password credentials and returns a signed bearer token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "password": "secret1"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiIs...",
///     "expires_in": 3600
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: invalid request data or invalid credentials
/// - 500 Internal Server Error: database or token generation failure
pub async fn login<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PasswordHasherTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure(errors);
    }

    let credentials = Credentials::new(request.email.trim(), request.password.as_str());

    match state.auth_service.authenticate(&credentials).await {
        Ok(response) => HttpResponse::Ok().json(TokenResponse {
            token: response.token,
            expires_in: response.expires_in,
        }),
        Err(error) => handle_domain_error(error),
    }
}
