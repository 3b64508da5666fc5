//! Login credential value object.

use std::fmt;

/// Email/secret pair submitted at login
///
/// Lives for a single request and is never persisted; the secret is
/// compared against the stored digest and dropped.
#[derive(Clone)]
pub struct Credentials {
    /// Email address identifying the account
    pub email: String,

    /// Plaintext password to verify
    pub secret: String,
}

impl Credentials {
    /// Creates a new credential pair
    pub fn new(email: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("ada@example.com", "hunter2");
        let output = format!("{:?}", credentials);

        assert!(output.contains("ada@example.com"));
        assert!(!output.contains("hunter2"));
    }
}
