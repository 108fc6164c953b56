//! Login gate: credentials in, signed token out.

use std::sync::Arc;

use authn_resolver_sdk::{IdentityResolver, LoginResult, PrincipalProfile};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use super::{DomainError, SecretHasher, TokenCodec};

/// Compared against when the username is unknown, so that both rejection
/// paths do one hash comparison.
const DECOY_SECRET: &str = "decoy-secret-for-unknown-users";

/// Validates a username/secret pair and issues a token for it.
///
/// Unknown usernames and wrong secrets are both reported as
/// `InvalidCredentials`.
pub struct AuthenticationGate {
    identities: Arc<dyn IdentityResolver>,
    hasher: Arc<dyn SecretHasher>,
    codec: Arc<TokenCodec>,
    decoy_hash: String,
}

impl AuthenticationGate {
    /// # Errors
    ///
    /// Returns `DomainError::Hashing` if the decoy hash cannot be computed.
    pub fn new(
        identities: Arc<dyn IdentityResolver>,
        hasher: Arc<dyn SecretHasher>,
        codec: Arc<TokenCodec>,
    ) -> Result<Self, DomainError> {
        let decoy_hash = hasher.hash(DECOY_SECRET)?;
        Ok(Self {
            identities,
            hasher,
            codec,
            decoy_hash,
        })
    }

    /// Check the credentials and issue a token for the resolved principal.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` for an unknown username or a wrong secret
    /// - `IdentityUnavailable` if the identity store failed
    /// - `Internal` if hashing or signing failed
    pub async fn authenticate(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<LoginResult, DomainError> {
        let Some(principal) = self.identities.resolve(username).await? else {
            self.verify_secret(secret, self.decoy_hash.clone()).await?;
            debug!("login rejected: unknown username");
            return Err(DomainError::InvalidCredentials);
        };

        let stored = principal.password_hash().expose_secret().to_owned();
        if !self.verify_secret(secret, stored).await? {
            debug!(user_id = principal.id(), "login rejected: secret mismatch");
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.codec.issue(&principal)?;
        debug!(user_id = principal.id(), expires_at = %token.expires_at, "token issued");

        Ok(LoginResult {
            token,
            profile: PrincipalProfile::from(&principal),
        })
    }

    async fn verify_secret(&self, secret: &str, hash: String) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let secret = SecretString::from(secret.to_owned());

        tokio::task::spawn_blocking(move || hasher.verify(secret.expose_secret(), &hash))
            .await
            .map_err(|e| DomainError::Internal(format!("hashing task failed: {e}")))
    }
}
