use secrecy::SecretString;

use crate::Principal;

/// `AuthorizationContext` carries the outcome of request authentication.
///
/// Built once per request by the authentication middleware and attached to the
/// request; handlers read it to make authorization decisions. There are no
/// setters: a context is either anonymous or bound to the principal whose
/// username equals the verified token subject.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationContext {
    principal: Option<Principal>,
    /// Raw bearer token, kept for diagnostics only.
    /// Wrapped in `SecretString` so `Debug` redacts the value automatically.
    bearer_token: Option<SecretString>,
}

impl AuthorizationContext {
    /// Context for a request that presented no usable credential.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a request whose token verified and whose subject resolved.
    #[must_use]
    pub fn authenticated(principal: Principal, bearer_token: impl Into<SecretString>) -> Self {
        Self {
            principal: Some(principal),
            bearer_token: Some(bearer_token.into()),
        }
    }

    #[must_use]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// `true` only for an authenticated principal carrying the privilege flag.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.principal.as_ref().is_some_and(Principal::is_admin)
    }

    /// Ownership check: is the authenticated principal `username`?
    #[must_use]
    pub fn is_subject(&self, username: &str) -> bool {
        self.principal
            .as_ref()
            .is_some_and(|p| p.username() == username)
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }
}
