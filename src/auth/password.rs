use bcrypt::{hash, verify, BcryptError};
use thiserror::Error;

/// bcrypt work factor used unless configured otherwise.
pub const DEFAULT_COST: u32 = 12;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("failed to hash password: {0}")]
    Hash(#[source] BcryptError),
    #[error("failed to verify password: {0}")]
    Verify(#[source] BcryptError),
}

/// Salted one-way hashing of passwords.
///
/// Every call to [`PasswordHasher::hash`] draws a fresh random salt, so two digests of the
/// same password differ. The cost factor is embedded in the digest and picked up again by
/// [`PasswordHasher::verify`], which compares in constant time.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        hash(plaintext, self.cost).map_err(HashError::Hash)
    }

    /// Returns `Ok(false)` on mismatch. A digest that is not valid bcrypt is an error.
    pub fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashError> {
        verify(plaintext, digest).map_err(HashError::Verify)
    }
}
