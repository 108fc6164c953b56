#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! API Gateway
//!
//! HTTP edge of the studio backend. Every request passes through the
//! authentication middleware, which attaches an `AuthorizationContext`
//! (authenticated or anonymous) to the request extensions. Handlers enforce
//! access with the [`Authz`] and [`Authenticated`] extractors.
//!
//! Endpoints served here:
//! - `POST /api/auth/login` - exchange email and password for a bearer token

pub mod auth;
pub mod config;
pub mod extract;
pub mod login;
pub mod problem;
pub mod router;

pub use auth::{AuthState, authn_middleware};
pub use config::ApiGatewayConfig;
pub use extract::{Authenticated, Authz};
pub use problem::Problem;
pub use router::build_router;
