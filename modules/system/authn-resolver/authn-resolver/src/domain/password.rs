//! Secret hashing used by the login gate.

use super::DomainError;

/// One-way hashing and comparison of login secrets.
///
/// Implementations are CPU-bound; callers run them on the blocking pool.
pub trait SecretHasher: Send + Sync {
    /// Hash `secret` with a fresh salt.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Hashing` if the hashing backend fails.
    fn hash(&self, secret: &str) -> Result<String, DomainError>;

    /// Compare `secret` against a stored hash.
    ///
    /// A stored value that is not a valid hash never matches.
    fn verify(&self, secret: &str, hash: &str) -> bool;
}

/// bcrypt-backed [`SecretHasher`], compatible with `$2a$`/`$2b$`/`$2y$` hashes.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// # Errors
    ///
    /// Returns `DomainError::Config` if `cost` is outside bcrypt's 4..=31 range.
    pub fn new(cost: u32) -> Result<Self, DomainError> {
        if !(4..=31).contains(&cost) {
            return Err(DomainError::Config(format!(
                "bcrypt_cost must be between 4 and 31, got {cost}"
            )));
        }
        Ok(Self { cost })
    }
}

impl SecretHasher for BcryptHasher {
    fn hash(&self, secret: &str) -> Result<String, DomainError> {
        bcrypt::hash(secret, self.cost).map_err(|e| DomainError::Hashing(e.to_string()))
    }

    fn verify(&self, secret: &str, hash: &str) -> bool {
        match bcrypt::verify(secret, hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::warn!(error = %e, "stored secret hash is not a bcrypt hash");
                false
            }
        }
    }
}
