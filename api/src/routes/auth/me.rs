use actix_web::{http::header::AUTHORIZATION, web, HttpRequest, HttpResponse};

use crate::dto::auth_dto::{MeResponse, UserDto};
use crate::handlers::error::handle_domain_error;

use gate_core::repositories::UserRepository;
use gate_core::services::password::PasswordHasherTrait;

use super::AppState;

/// Handler for GET /api/v1/auth/me
///
/// Resolves the bearer token from the Authorization header to the user it
/// was issued for.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "user": { "id": "...", "name": "A", "email": "a@a.com", "created_at": "..." }
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: token absent, invalid, or expired (distinct
///   `error` codes, so clients can choose between silent re-login and
///   forced logout)
/// - 404 Not Found: the token's subject no longer exists
pub async fn me<U, P>(req: HttpRequest, state: web::Data<AppState<U, P>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PasswordHasherTrait + 'static,
{
    let token = extract_bearer_token(&req);

    match state.auth_service.authenticated_user(token.as_deref()).await {
        Ok(user) => HttpResponse::Ok().json(MeResponse {
            user: UserDto::from(user),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_bearer_token() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer test_token_123"))
            .to_http_request();

        assert_eq!(
            extract_bearer_token(&req),
            Some("test_token_123".to_string())
        );

        let req_no_bearer = TestRequest::default()
            .insert_header((AUTHORIZATION, "test_token_123"))
            .to_http_request();

        assert_eq!(extract_bearer_token(&req_no_bearer), None);

        let req_no_header = TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req_no_header), None);
    }
}
