//! Error types for the `AuthN` resolver module.

use thiserror::Error;

/// Why a bearer token failed verification.
///
/// Each kind is logged separately by callers, but every kind means the same
/// thing to request handling: the request carries no identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The input cannot be decoded into a signed token (empty, wrong number of
    /// segments, undecodable segments, unknown header).
    #[error("malformed token: {0}")]
    Malformed(String),

    /// Well-formed and correctly signed, but a required claim is missing.
    #[error("unsupported token: {0}")]
    Unsupported(String),

    /// Decodes, but the signature does not match the signing secret.
    #[error("invalid token signature")]
    InvalidSignature,

    /// Signature is valid but the token is past its expiration.
    #[error("token expired")]
    Expired,
}

impl TokenError {
    /// Short, stable label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Malformed(_) => "malformed",
            Self::Unsupported(_) => "unsupported",
            Self::InvalidSignature => "invalid_signature",
            Self::Expired => "expired",
        }
    }
}

/// Errors that can occur when authenticating a bearer token.
#[derive(Debug, Error)]
pub enum AuthNResolverError {
    /// The token did not verify.
    #[error(transparent)]
    Token(#[from] TokenError),

    /// The token verified but its subject no longer resolves.
    #[error("identity not found: {0}")]
    IdentityNotFound(String),

    /// The identity store could not be queried.
    #[error("identity store unavailable: {0}")]
    IdentityUnavailable(String),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors returned by the login gate.
///
/// `InvalidCredentials` is the only client-facing kind: unknown
/// usernames and wrong secrets are indistinguishable.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors an identity store may report.
///
/// "Not found" is not an error: resolvers return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum IdentityResolverError {
    #[error("identity store unavailable: {0}")]
    Unavailable(String),
}
