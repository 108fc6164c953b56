use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_owned()
}

fn default_body_limit_bytes() -> usize {
    1024 * 1024
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// API gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiGatewayConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Where the bearer credential is read from
    #[serde(default)]
    pub auth_header: AuthHeaderConfig,

    /// Global defaults
    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for ApiGatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            auth_header: AuthHeaderConfig::default(),
            defaults: Defaults::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct AuthHeaderConfig {
    /// Request header carrying the credential
    pub name: String,
    /// Prefix that marks a bearer credential; matched exactly, including the trailing space
    pub scheme: String,
}

impl Default for AuthHeaderConfig {
    fn default() -> Self {
        Self {
            name: "Authorization".to_owned(),
            scheme: "Bearer ".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Defaults {
    /// Global request body size limit in bytes
    pub body_limit_bytes: usize,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Defaults {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            body_limit_bytes: default_body_limit_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
