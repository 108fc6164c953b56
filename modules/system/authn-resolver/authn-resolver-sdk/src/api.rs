//! Public API trait for the `AuthN` resolver.
//!
//! This trait defines the interface that consumers (primarily the API
//! gateway) use to verify bearer tokens and to log users in.

use async_trait::async_trait;

use crate::error::{AuthNResolverError, LoginError};
use crate::models::{AuthenticationResult, LoginResult};

/// Public API trait for the `AuthN` resolver.
///
/// ```ignore
/// let result = authn.authenticate("eyJhbGciOiJIUzUxMiJ9...").await?;
/// let ctx = result.authorization_context;
/// ```
#[async_trait]
pub trait AuthNResolverClient: Send + Sync {
    /// Verify a bearer token and resolve its subject.
    ///
    /// # Arguments
    ///
    /// * `bearer_token` - The raw token string (without the scheme prefix)
    ///
    /// # Errors
    ///
    /// - `Token` if the token is malformed, unsupported, badly signed or expired
    /// - `IdentityNotFound` if the subject no longer exists
    /// - `IdentityUnavailable` if the identity store could not be queried
    async fn authenticate(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticationResult, AuthNResolverError>;

    /// Check a username/secret pair and issue a token on success.
    ///
    /// # Errors
    ///
    /// - `InvalidCredentials` for an unknown username or a wrong secret
    /// - `Internal` if the identity store or hashing failed
    async fn login(&self, username: &str, secret: &str) -> Result<LoginResult, LoginError>;
}
