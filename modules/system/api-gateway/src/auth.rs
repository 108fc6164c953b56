use std::sync::Arc;

use anyhow::Context;
use authn_resolver_sdk::{AuthNResolverClient, AuthNResolverError};
use axum::http::{HeaderMap, HeaderName};
use studio_security::AuthorizationContext;

use crate::config::AuthHeaderConfig;

/// Shared state for the authentication middleware.
///
/// Resolves each request's bearer credential into an [`AuthorizationContext`].
/// Never rejects a request: every failure collapses to an anonymous context
/// and authorization is left to the handlers.
#[derive(Clone)]
pub struct AuthState {
    authn_client: Arc<dyn AuthNResolverClient>,
    header_name: HeaderName,
    scheme: Arc<str>,
}

impl AuthState {
    /// # Errors
    ///
    /// Fails if the configured header name is not a valid HTTP header name or
    /// the scheme prefix is empty.
    pub fn new(
        authn_client: Arc<dyn AuthNResolverClient>,
        cfg: &AuthHeaderConfig,
    ) -> anyhow::Result<Self> {
        let header_name = HeaderName::try_from(cfg.name.as_str())
            .with_context(|| format!("invalid auth header name '{}'", cfg.name))?;
        anyhow::ensure!(!cfg.scheme.is_empty(), "auth header scheme must not be empty");

        Ok(Self {
            authn_client,
            header_name,
            scheme: Arc::from(cfg.scheme.as_str()),
        })
    }

    /// Build the authorization context for a request.
    pub async fn authenticate(&self, headers: &HeaderMap) -> AuthorizationContext {
        let Some(token) = extract_bearer_token(headers, &self.header_name, &self.scheme) else {
            return AuthorizationContext::anonymous();
        };

        match self.authn_client.authenticate(token).await {
            Ok(result) => result.authorization_context,
            Err(err) => {
                log_authn_error(&err);
                AuthorizationContext::anonymous()
            }
        }
    }
}

/// Authentication middleware that uses the `AuthN` Resolver to validate bearer tokens.
///
/// Inserts an `AuthorizationContext` into the request extensions and always
/// passes the request on.
pub async fn authn_middleware(
    axum::extract::State(state): axum::extract::State<AuthState>,
    mut req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let ctx = state.authenticate(req.headers()).await;
    req.extensions_mut().insert(ctx);
    next.run(req).await
}

/// Log authentication errors at appropriate levels.
///
/// Cognitive complexity is inflated by tracing macro expansion.
#[allow(clippy::cognitive_complexity)]
fn log_authn_error(err: &AuthNResolverError) {
    match err {
        AuthNResolverError::Token(e) => {
            tracing::debug!(reason = e.kind(), "bearer token rejected");
        }
        AuthNResolverError::IdentityNotFound(_) => {
            tracing::debug!(reason = "identity_not_found", "token subject no longer resolves");
        }
        AuthNResolverError::IdentityUnavailable(msg) => {
            tracing::warn!(reason = "identity_unavailable", error = %msg, "identity lookup failed");
        }
        AuthNResolverError::Internal(msg) => {
            tracing::warn!(reason = "internal", error = %msg, "authentication failed");
        }
    }
}

/// Extract the bearer credential from `name`, if it starts with `scheme`.
///
/// The remainder after the prefix is returned verbatim.
fn extract_bearer_token<'a>(
    headers: &'a HeaderMap,
    name: &HeaderName,
    scheme: &str,
) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix(scheme))
}
