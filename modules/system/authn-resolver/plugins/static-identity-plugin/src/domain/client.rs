//! Client implementation for the static identity plugin.
//!
//! Implements `IdentityResolver` using the domain service.

use async_trait::async_trait;
use authn_resolver_sdk::{IdentityResolver, IdentityResolverError};
use studio_security::Principal;

use super::service::Service;

#[async_trait]
impl IdentityResolver for Service {
    async fn resolve(&self, username: &str) -> Result<Option<Principal>, IdentityResolverError> {
        Ok(self.find(username).cloned())
    }
}
