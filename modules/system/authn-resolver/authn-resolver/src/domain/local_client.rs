//! Local (in-process) client for the `AuthN` resolver.

use std::sync::Arc;

use async_trait::async_trait;
use authn_resolver_sdk::{
    AuthNResolverClient, AuthNResolverError, AuthenticationResult, LoginError, LoginResult,
};

use super::{DomainError, Service};

/// Local client wrapping the service.
pub struct AuthNResolverLocalClient {
    svc: Arc<Service>,
}

impl AuthNResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

/// Expected rejections pass through quietly; the caller decides how loud to be.
fn log_unexpected(op: &str, e: &DomainError) {
    match e {
        DomainError::Token(_)
        | DomainError::IdentityNotFound(_)
        | DomainError::InvalidCredentials => {}
        _ => tracing::error!(operation = op, error = %e, "authn_resolver call failed"),
    }
}

#[async_trait]
impl AuthNResolverClient for AuthNResolverLocalClient {
    async fn authenticate(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticationResult, AuthNResolverError> {
        self.svc.authenticate(bearer_token).await.map_err(|e| {
            log_unexpected("authenticate", &e);
            e.into()
        })
    }

    async fn login(&self, username: &str, secret: &str) -> Result<LoginResult, LoginError> {
        self.svc.login(username, secret).await.map_err(|e| {
            log_unexpected("login", &e);
            e.into()
        })
    }
}
