//! Configuration for the `AuthN` resolver.

use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

/// Default token lifetime: 24h.
pub const DEFAULT_JWT_EXPIRATION_MS: u64 = 86_400_000;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthNResolverConfig {
    /// Symmetric signing secret for issued tokens. Required; must not be empty.
    pub jwt_secret: SecretString,

    /// Token validity window in milliseconds.
    pub jwt_expiration_ms: u64,

    /// bcrypt work factor used when hashing secrets.
    pub bcrypt_cost: u32,
}

impl AuthNResolverConfig {
    #[must_use]
    pub fn validity(&self) -> Duration {
        Duration::from_millis(self.jwt_expiration_ms)
    }
}

impl Default for AuthNResolverConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::from(String::new()),
            jwt_expiration_ms: DEFAULT_JWT_EXPIRATION_MS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn defaults_to_one_day_tokens() {
        let cfg = AuthNResolverConfig::default();

        assert_eq!(cfg.validity(), Duration::from_secs(24 * 60 * 60));
        assert_eq!(cfg.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert!(cfg.jwt_secret.expose_secret().is_empty());
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let cfg = AuthNResolverConfig {
            jwt_secret: SecretString::from("studioSigningSecret".to_owned()),
            ..AuthNResolverConfig::default()
        };

        assert!(!format!("{cfg:?}").contains("studioSigningSecret"));
    }
}
