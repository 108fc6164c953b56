//! Axum extractors for the per-request authorization context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use studio_security::{AuthorizationContext, Principal};

use crate::problem::Problem;

/// Extractor for `AuthorizationContext` - validates that auth middleware has run
#[derive(Debug, Clone)]
pub struct Authz(pub AuthorizationContext);

impl<S> FromRequestParts<S> for Authz
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthorizationContext>()
            .cloned()
            .map(Authz)
            .ok_or_else(|| {
                tracing::error!("AuthorizationContext not found - auth middleware not configured");
                Problem::internal()
            })
    }
}

/// Extractor for the authenticated principal; anonymous requests get 401.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Authz(ctx) = Authz::from_request_parts(parts, state).await?;
        ctx.principal()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| {
                Problem::unauthorized("Full authentication is required to access this resource")
            })
    }
}
