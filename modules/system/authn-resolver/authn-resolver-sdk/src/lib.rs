//! `AuthN` Resolver SDK
//!
//! This crate provides the public API for the `authn_resolver` module:
//!
//! - [`AuthNResolverClient`] - Public API trait for consumers
//! - [`IdentityResolver`] - Plugin API trait for identity stores
//! - [`AuthenticationResult`], [`LoginResult`], [`IssuedToken`] - Result models
//! - [`TokenError`], [`AuthNResolverError`], [`LoginError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use authn_resolver_sdk::AuthNResolverClient;
//!
//! let result = authn.authenticate(token).await?;
//! let ctx = result.authorization_context;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;

// Re-export main types at crate root
pub use api::AuthNResolverClient;
pub use error::{AuthNResolverError, IdentityResolverError, LoginError, TokenError};
pub use models::{AuthenticationResult, IssuedToken, LoginResult, PrincipalProfile};
pub use plugin_api::IdentityResolver;
