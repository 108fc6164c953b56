//! Process configuration: struct defaults, then the YAML file, then
//! `STUDIO__`-prefixed environment variables.

use std::path::Path;

use anyhow::Context;
use api_gateway::ApiGatewayConfig;
use authn_resolver::AuthNResolverConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use static_identity_plugin::StaticIdentityPluginConfig;

pub const ENV_PREFIX: &str = "STUDIO__";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub auth: AuthNResolverConfig,
    pub api_gateway: ApiGatewayConfig,
    pub identities: StaticIdentityPluginConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

fn figment(path: Option<&Path>) -> Figment {
    let mut figment = Figment::new();
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load configuration.
///
/// # Errors
///
/// Fails if `path` does not exist or the merged configuration does not
/// deserialize.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = path {
        anyhow::ensure!(
            path.is_file(),
            "config file not found: {}",
            path.display()
        );
    }

    figment(path)
        .extract()
        .context("failed to load configuration")
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use figment::Jail;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn defaults_without_sources() {
        let cfg = load(None).unwrap();

        assert_eq!(cfg.auth.jwt_expiration_ms, 86_400_000);
        assert_eq!(cfg.api_gateway.bind_addr, "127.0.0.1:8080");
        assert!(cfg.identities.users.is_empty());
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
auth:
  jwt_secret: "fileSecret"
  jwt_expiration_ms: 1000
identities:
  users:
    - id: 1
      username: "yoga@studio.com"
      admin: true
      password_hash: "$2b$04$abc"
"#
        )
        .unwrap();

        let cfg = load(Some(file.path())).unwrap();

        assert_eq!(cfg.auth.jwt_secret.expose_secret(), "fileSecret");
        assert_eq!(cfg.auth.jwt_expiration_ms, 1000);
        assert_eq!(cfg.auth.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(cfg.identities.users.len(), 1);
        assert!(cfg.identities.users[0].admin);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load(Some(dir.path().join("absent.yaml").as_path())).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "database:\n  url: \"postgres://\"").unwrap();

        assert!(load(Some(file.path())).is_err());
    }

    #[test]
    fn environment_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "studio.yaml",
                r#"
auth:
  jwt_secret: "fileSecret"
api_gateway:
  bind_addr: "0.0.0.0:9000"
"#,
            )?;
            jail.set_env("STUDIO__AUTH__JWT_SECRET", "envSecret");
            jail.set_env("STUDIO__API_GATEWAY__AUTH_HEADER__NAME", "X-Studio-Auth");

            let cfg: AppConfig = figment(Some(Path::new("studio.yaml"))).extract()?;

            assert_eq!(cfg.auth.jwt_secret.expose_secret(), "envSecret");
            assert_eq!(cfg.api_gateway.bind_addr, "0.0.0.0:9000");
            assert_eq!(cfg.api_gateway.auth_header.name, "X-Studio-Auth");
            assert_eq!(cfg.api_gateway.auth_header.scheme, "Bearer ");
            Ok(())
        });
    }
}
