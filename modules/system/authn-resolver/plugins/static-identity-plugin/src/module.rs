//! Static identity plugin module.

use std::sync::Arc;

use authn_resolver_sdk::IdentityResolver;
use secrecy::ExposeSecret;
use tracing::{info, warn};

use crate::config::StaticIdentityPluginConfig;
use crate::domain::Service;

/// Static identity plugin.
///
/// Serves principals from the configured user list.
pub struct StaticIdentityPlugin;

impl StaticIdentityPlugin {
    /// # Errors
    ///
    /// Fails if the user list contains a duplicate username.
    #[tracing::instrument(skip_all)]
    pub fn init(cfg: &StaticIdentityPluginConfig) -> anyhow::Result<Arc<dyn IdentityResolver>> {
        info!("Initializing static_identity_plugin");

        for user in &cfg.users {
            // bcrypt hashes are "$2a$", "$2b$" or "$2y$" prefixed.
            if !user.password_hash.expose_secret().starts_with("$2") {
                warn!(
                    user_id = user.id,
                    "password_hash is not a bcrypt hash; this user will never log in"
                );
            }
        }

        let service = Service::from_config(cfg)?;
        if service.is_empty() {
            warn!("Identity list is empty; every login will be rejected");
        }

        info!(user_count = service.len(), "Static identity plugin initialized");
        Ok(Arc::new(service))
    }
}
