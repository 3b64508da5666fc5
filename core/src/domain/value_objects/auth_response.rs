//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::IssuedToken;
use crate::domain::entities::user::User;

/// Outcome of a successful authentication or registration
///
/// Carries the resolved user together with the signed token and its
/// validity window; the transport layer shapes this for the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The authenticated user
    pub user: User,

    /// Signed bearer token
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a user and an issued token
    pub fn new(user: User, issued: IssuedToken) -> Self {
        Self {
            user,
            token: issued.token,
            expires_in: issued.expires_in,
        }
    }
}
