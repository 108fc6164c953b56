//! `AuthN` resolver wiring.

use std::sync::Arc;

use authn_resolver_sdk::{AuthNResolverClient, IdentityResolver};
use tracing::info;

use crate::config::AuthNResolverConfig;
use crate::domain::{
    AuthNResolverLocalClient, AuthenticationGate, BcryptHasher, SecretHasher, Service, TokenCodec,
};

/// `AuthN` resolver.
///
/// Builds the token codec, the login gate and the verification service from
/// configuration and exposes them as an [`AuthNResolverClient`].
pub struct AuthNResolver;

impl AuthNResolver {
    /// Initialize with bcrypt hashing at the configured cost.
    ///
    /// # Errors
    ///
    /// Fails if the signing secret is empty or the bcrypt cost is out of range.
    #[tracing::instrument(skip_all)]
    pub fn init(
        cfg: &AuthNResolverConfig,
        identities: Arc<dyn IdentityResolver>,
    ) -> anyhow::Result<Arc<dyn AuthNResolverClient>> {
        let hasher = Arc::new(BcryptHasher::new(cfg.bcrypt_cost)?);
        Self::init_with_hasher(cfg, identities, hasher)
    }

    /// Initialize with a caller-supplied secret hasher.
    ///
    /// # Errors
    ///
    /// Fails if the signing secret is empty or the decoy hash cannot be computed.
    #[tracing::instrument(skip_all)]
    pub fn init_with_hasher(
        cfg: &AuthNResolverConfig,
        identities: Arc<dyn IdentityResolver>,
        hasher: Arc<dyn SecretHasher>,
    ) -> anyhow::Result<Arc<dyn AuthNResolverClient>> {
        info!(
            jwt_expiration_ms = cfg.jwt_expiration_ms,
            "Initializing authn_resolver"
        );

        let codec = Arc::new(TokenCodec::new(&cfg.jwt_secret, cfg.validity())?);
        let gate = AuthenticationGate::new(Arc::clone(&identities), hasher, Arc::clone(&codec))?;
        let svc = Arc::new(Service::new(codec, identities, gate));

        info!("authn_resolver ready");
        Ok(Arc::new(AuthNResolverLocalClient::new(svc)))
    }
}
