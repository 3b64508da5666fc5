use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth_dto::{RegisterRequest, RegisterResponse, UserDto};
use crate::handlers::error::{handle_domain_error, validation_failure};

use gate_core::domain::value_objects::NewRegistration;
use gate_core::repositories::UserRepository;
use gate_core::services::password::PasswordHasherTrait;

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates a new account and returns the user together with a freshly
/// issued token, so the user does not need a separate login.
///
/// # Request Body
///
/// ```json
/// {
///     "name": "A",
///     "email": "a@a.com",
///     "password": "secret1",
///     "password_confirmation": "secret1"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "user": { "id": "...", "name": "A", "email": "a@a.com", "created_at": "..." },
///     "token": "eyJhbGciOiJIUzI1NiIs...",
///     "expires_in": 3600
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: field validation failure
/// - 500 Internal Server Error: duplicate email, database, or token failure
pub async fn register<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PasswordHasherTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_failure(errors);
    }

    let registration = NewRegistration::new(
        request.name.trim(),
        request.email.trim(),
        request.password.as_str(),
    );

    match state.registration_service.register(&registration).await {
        Ok(response) => HttpResponse::Created().json(RegisterResponse {
            user: UserDto::from(response.user),
            token: response.token,
            expires_in: response.expires_in,
        }),
        Err(error) => handle_domain_error(error),
    }
}
