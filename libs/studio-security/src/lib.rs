#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod context;
pub mod principal;

pub use context::AuthorizationContext;
pub use principal::{Principal, PrincipalBuilder};
