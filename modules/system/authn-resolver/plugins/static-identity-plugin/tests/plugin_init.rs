#![allow(clippy::unwrap_used, clippy::expect_used)]

use authn_resolver_sdk::IdentityResolver as _;
use secrecy::SecretString;
use static_identity_plugin::{StaticIdentityPlugin, StaticIdentityPluginConfig, UserConfig};
use tracing_test::traced_test;

fn user(id: i64, username: &str, password_hash: &str) -> UserConfig {
    UserConfig {
        id,
        username: username.to_owned(),
        first_name: String::new(),
        last_name: String::new(),
        admin: false,
        password_hash: SecretString::from(password_hash.to_owned()),
    }
}

#[tokio::test]
async fn resolves_configured_principal() {
    let cfg = StaticIdentityPluginConfig {
        users: vec![user(7, "user1@studio.com", "$2b$04$hash")],
    };
    let identities = StaticIdentityPlugin::init(&cfg).unwrap();

    let principal = identities.resolve("user1@studio.com").await.unwrap().unwrap();

    assert_eq!(principal.id(), 7);
    assert_eq!(principal.username(), "user1@studio.com");
}

#[test]
fn duplicate_username_fails_init() {
    let cfg = StaticIdentityPluginConfig {
        users: vec![
            user(1, "user1@studio.com", "$2b$04$a"),
            user(2, "user1@studio.com", "$2b$04$b"),
        ],
    };

    let err = StaticIdentityPlugin::init(&cfg).err().unwrap();
    assert!(err.to_string().contains("user1@studio.com"));
}

#[test]
#[traced_test]
fn plaintext_password_is_flagged() {
    let cfg = StaticIdentityPluginConfig {
        users: vec![user(1, "user1@studio.com", "password")],
    };

    StaticIdentityPlugin::init(&cfg).unwrap();

    assert!(logs_contain("not a bcrypt hash"));
}
