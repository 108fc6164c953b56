//! `AuthN` Resolver
//!
//! Issues signed bearer tokens for valid credentials and verifies presented
//! tokens against the identity store.
//!
//! Exposes the `AuthNResolverClient` trait for consumption by the API gateway.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod module;

pub use config::AuthNResolverConfig;
pub use module::AuthNResolver;
