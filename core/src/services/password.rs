//! Password hashing seam used by authentication and registration.
//!
//! The core never sees hashing internals; it hands a plaintext password
//! to this trait and gets back a digest or a verification verdict.

use crate::errors::DomainResult;

/// One-way password hashing service
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plaintext password into a storable digest
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Verify a plaintext password against a stored digest
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The password matches the digest
    /// * `Ok(false)` - The password does not match
    /// * `Err(DomainError)` - The digest is unreadable or hashing failed
    fn verify(&self, password: &str, digest: &str) -> DomainResult<bool>;
}
