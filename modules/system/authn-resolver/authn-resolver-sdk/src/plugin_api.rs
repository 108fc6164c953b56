//! Plugin API trait for identity stores.
//!
//! The resolver never reads users itself: it asks an `IdentityResolver`
//! implementation (backed by whatever store the deployment uses) to turn a
//! token subject or login name into a `Principal`.

use async_trait::async_trait;
use studio_security::Principal;

use crate::error::IdentityResolverError;

/// Lookup capability for principals, keyed by username.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Find the principal whose username is exactly `username`.
    ///
    /// Returns `Ok(None)` when no such principal exists.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the backing store cannot be queried
    async fn resolve(&self, username: &str) -> Result<Option<Principal>, IdentityResolverError>;
}
