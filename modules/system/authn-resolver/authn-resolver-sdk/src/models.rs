//! Domain models for the `AuthN` resolver module.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use studio_security::{AuthorizationContext, Principal};

/// Result of a successful bearer authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Context bound to the resolved principal, carrying the presented token.
    pub authorization_context: AuthorizationContext,
}

/// A freshly signed bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact token string (`header.claims.signature`).
    pub token: SecretString,
    /// Token subject, always the principal's username.
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Public fields of a principal, safe to return to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalProfile {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl From<&Principal> for PrincipalProfile {
    fn from(p: &Principal) -> Self {
        Self {
            id: p.id(),
            username: p.username().to_owned(),
            first_name: p.first_name().to_owned(),
            last_name: p.last_name().to_owned(),
            admin: p.is_admin(),
        }
    }
}

/// Result of a successful login: the token plus who it was issued to.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub token: IssuedToken,
    pub profile: PrincipalProfile,
}
