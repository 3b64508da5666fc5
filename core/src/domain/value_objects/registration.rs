//! Registration input value object.

use std::fmt;

/// Field set for creating a new account
///
/// Field constraints are enforced at the transport boundary; this value
/// object carries already-validated input to the registration service.
#[derive(Clone)]
pub struct NewRegistration {
    /// Display name for the new account
    pub name: String,

    /// Email address, unique across the store
    pub email: String,

    /// Plaintext password, hashed before it reaches the store
    pub password: String,
}

impl NewRegistration {
    /// Creates a new registration input
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for NewRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewRegistration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
