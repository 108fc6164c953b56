//! Identity stores for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use authn_resolver_sdk::{IdentityResolver, IdentityResolverError};
use studio_security::Principal;

pub fn principal(id: i64, username: &str, admin: bool, password_hash: &str) -> Principal {
    Principal::builder()
        .id(id)
        .username(username)
        .first_name("Yoga")
        .last_name("Studio")
        .admin(admin)
        .password_hash(password_hash.to_owned())
        .build()
}

/// Mutable store so tests can delete a user after a token was issued.
#[derive(Default)]
pub struct InMemoryIdentities {
    users: Mutex<HashMap<String, Principal>>,
}

impl InMemoryIdentities {
    pub fn with(users: Vec<Principal>) -> Self {
        Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .map(|p| (p.username().to_owned(), p))
                    .collect(),
            ),
        }
    }

    pub fn remove(&self, username: &str) {
        self.users.lock().unwrap().remove(username);
    }
}

#[async_trait]
impl IdentityResolver for InMemoryIdentities {
    async fn resolve(&self, username: &str) -> Result<Option<Principal>, IdentityResolverError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }
}

pub struct FailingIdentities;

#[async_trait]
impl IdentityResolver for FailingIdentities {
    async fn resolve(&self, _username: &str) -> Result<Option<Principal>, IdentityResolverError> {
        Err(IdentityResolverError::Unavailable("connection refused".to_owned()))
    }
}

/// Returns a principal under a different username than the one asked for.
pub struct MismatchedIdentities;

#[async_trait]
impl IdentityResolver for MismatchedIdentities {
    async fn resolve(&self, _username: &str) -> Result<Option<Principal>, IdentityResolverError> {
        Ok(Some(principal(42, "someone-else@studio.com", true, "")))
    }
}
