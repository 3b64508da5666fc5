//! bcrypt implementation of the password hashing seam

use bcrypt::{hash, verify, DEFAULT_COST};

use gate_core::errors::{DomainError, DomainResult};
use gate_core::services::password::PasswordHasherTrait;

/// Password hasher backed by bcrypt
///
/// Each digest carries its own salt, so hashing the same password twice
/// yields different digests.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default work factor
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a hasher with an explicit work factor
    ///
    /// Costs below the default are only appropriate for tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherTrait for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, password: &str, digest: &str) -> DomainResult<bool> {
        verify(password, digest).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}
