//! Service implementation for the static identity plugin.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use studio_security::Principal;

use crate::config::StaticIdentityPluginConfig;

/// Two configured users share a username.
#[derive(Debug, thiserror::Error)]
#[error("duplicate username in identity list: {0}")]
pub struct DuplicateUsername(pub String);

/// Static identity store.
///
/// Lookup is by exact username; no case folding or trimming.
pub struct Service {
    users: HashMap<String, Principal>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateUsername`] if two entries share a username.
    pub fn from_config(cfg: &StaticIdentityPluginConfig) -> Result<Self, DuplicateUsername> {
        let mut users = HashMap::with_capacity(cfg.users.len());
        for user in &cfg.users {
            match users.entry(user.username.clone()) {
                Entry::Occupied(_) => return Err(DuplicateUsername(user.username.clone())),
                Entry::Vacant(slot) => {
                    slot.insert(Principal::from(user));
                }
            }
        }
        Ok(Self { users })
    }

    #[must_use]
    pub fn find(&self, username: &str) -> Option<&Principal> {
        self.users.get(username)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
