#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Identity Plugin
//!
//! Resolves usernames to principals from a user list held in configuration.
//! Suitable for small deployments and tests; a database-backed resolver can
//! replace it behind the same `IdentityResolver` trait.
//!
//! ## Configuration
//!
//! ```yaml
//! identities:
//!   users:
//!     - id: 1
//!       username: "yoga@studio.com"
//!       first_name: "Admin"
//!       last_name: "Admin"
//!       admin: true
//!       password_hash: "$2b$10$..."
//! ```

pub mod config;
pub mod domain;
pub mod module;

pub use config::{StaticIdentityPluginConfig, UserConfig};
pub use module::StaticIdentityPlugin;
