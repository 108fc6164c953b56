//! `AuthN` resolver service: token verification and login.

use std::sync::Arc;

use authn_resolver_sdk::{AuthenticationResult, IdentityResolver, LoginResult};
use studio_security::AuthorizationContext;

use super::{AuthenticationGate, DomainError, TokenCodec};

/// Verifies bearer tokens and resolves their subjects.
///
/// The identity store is consulted only after the token's signature and
/// expiry have both been checked.
pub struct Service {
    codec: Arc<TokenCodec>,
    identities: Arc<dyn IdentityResolver>,
    gate: AuthenticationGate,
}

impl Service {
    #[must_use]
    pub fn new(
        codec: Arc<TokenCodec>,
        identities: Arc<dyn IdentityResolver>,
        gate: AuthenticationGate,
    ) -> Self {
        Self {
            codec,
            identities,
            gate,
        }
    }

    /// Verify `bearer_token` and bind it to the principal it names.
    ///
    /// # Errors
    ///
    /// - `Token` if verification fails
    /// - `IdentityNotFound` if the subject does not resolve to that exact username
    /// - `IdentityUnavailable` if the identity store failed
    pub async fn authenticate(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticationResult, DomainError> {
        let subject = self.codec.parse_and_verify(bearer_token)?;

        let principal = self
            .identities
            .resolve(&subject)
            .await?
            .ok_or_else(|| DomainError::IdentityNotFound(subject.clone()))?;

        if principal.username() != subject {
            tracing::warn!(
                user_id = principal.id(),
                "identity store returned a principal for a different username"
            );
            return Err(DomainError::IdentityNotFound(subject));
        }

        Ok(AuthenticationResult {
            authorization_context: AuthorizationContext::authenticated(
                principal,
                bearer_token.to_owned(),
            ),
        })
    }

    /// # Errors
    ///
    /// See [`AuthenticationGate::authenticate`].
    pub async fn login(&self, username: &str, secret: &str) -> Result<LoginResult, DomainError> {
        self.gate.authenticate(username, secret).await
    }
}
