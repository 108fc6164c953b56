//! Domain errors for the `AuthN` resolver.

use authn_resolver_sdk::{AuthNResolverError, IdentityResolverError, LoginError, TokenError};

/// Internal domain errors.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("identity not found: {0}")]
    IdentityNotFound(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("identity store unavailable: {0}")]
    IdentityUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("hashing error: {0}")]
    Hashing(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<IdentityResolverError> for DomainError {
    fn from(e: IdentityResolverError) -> Self {
        match e {
            IdentityResolverError::Unavailable(reason) => Self::IdentityUnavailable(reason),
        }
    }
}

impl From<DomainError> for AuthNResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Token(err) => Self::Token(err),
            DomainError::IdentityNotFound(subject) => Self::IdentityNotFound(subject),
            DomainError::IdentityUnavailable(reason) => Self::IdentityUnavailable(reason),
            DomainError::InvalidCredentials => {
                Self::Internal("unexpected credential check".to_owned())
            }
            DomainError::Config(reason)
            | DomainError::Hashing(reason)
            | DomainError::Internal(reason) => Self::Internal(reason),
        }
    }
}

impl From<DomainError> for LoginError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidCredentials => Self::InvalidCredentials,
            other => Self::Internal(other.to_string()),
        }
    }
}
