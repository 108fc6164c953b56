#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Login and verification through the public client.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use authn_resolver::{AuthNResolver, AuthNResolverConfig};
use authn_resolver_sdk::{
    AuthNResolverClient, AuthNResolverError, IdentityResolver, IdentityResolverError, LoginError,
    TokenError,
};
use secrecy::{ExposeSecret, SecretString};
use studio_security::Principal;

struct Directory(HashMap<String, Principal>);

#[async_trait]
impl IdentityResolver for Directory {
    async fn resolve(&self, username: &str) -> Result<Option<Principal>, IdentityResolverError> {
        Ok(self.0.get(username).cloned())
    }
}

fn directory() -> Arc<dyn IdentityResolver> {
    let hash = bcrypt::hash("test!1234", 4).unwrap();
    let admin = Principal::builder()
        .id(1)
        .username("yoga@studio.com")
        .first_name("Admin")
        .last_name("Admin")
        .admin(true)
        .password_hash(hash)
        .build();
    Arc::new(Directory(HashMap::from([(
        admin.username().to_owned(),
        admin,
    )])))
}

fn client(jwt_expiration_ms: u64) -> Arc<dyn AuthNResolverClient> {
    let cfg = AuthNResolverConfig {
        jwt_secret: SecretString::from("testSecret".to_owned()),
        jwt_expiration_ms,
        bcrypt_cost: 4,
    };
    AuthNResolver::init(&cfg, directory()).unwrap()
}

#[tokio::test]
async fn issued_token_verifies_to_same_principal() {
    let client = client(86_400_000);

    let login = client.login("yoga@studio.com", "test!1234").await.unwrap();
    assert!(login.profile.admin);
    assert_eq!(login.profile.first_name, "Admin");

    let token = login.token.token.expose_secret().to_owned();
    let ctx = client
        .authenticate(&token)
        .await
        .unwrap()
        .authorization_context;

    assert!(ctx.is_authenticated());
    assert!(ctx.is_admin());
    assert!(ctx.is_subject("yoga@studio.com"));
}

#[tokio::test]
async fn token_expires_after_validity_window() {
    let client = client(500);

    let login = client.login("yoga@studio.com", "test!1234").await.unwrap();
    let token = login.token.token.expose_secret().to_owned();
    assert!(client.authenticate(&token).await.is_ok());

    tokio::time::sleep(Duration::from_secs(1)).await;

    let err = client.authenticate(&token).await.unwrap_err();
    assert!(matches!(err, AuthNResolverError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn zero_window_tokens_are_already_expired() {
    let client = client(0);

    let login = client.login("yoga@studio.com", "test!1234").await.unwrap();
    let err = client
        .authenticate(login.token.token.expose_secret())
        .await
        .unwrap_err();

    assert!(matches!(err, AuthNResolverError::Token(TokenError::Expired)));
}

#[tokio::test]
async fn bad_credentials_surface_as_invalid_credentials() {
    let client = client(86_400_000);

    let err = client
        .login("yoga@studio.com", "wrongpassword")
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::InvalidCredentials));
}

#[tokio::test]
async fn token_from_other_deployment_is_rejected() {
    let other = AuthNResolver::init(
        &AuthNResolverConfig {
            jwt_secret: SecretString::from("otherSecret".to_owned()),
            jwt_expiration_ms: 86_400_000,
            bcrypt_cost: 4,
        },
        directory(),
    )
    .unwrap();
    let login = other.login("yoga@studio.com", "test!1234").await.unwrap();

    let err = client(86_400_000)
        .authenticate(login.token.token.expose_secret())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AuthNResolverError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn empty_secret_fails_init() {
    let cfg = AuthNResolverConfig {
        bcrypt_cost: 4,
        ..AuthNResolverConfig::default()
    };

    assert!(AuthNResolver::init(&cfg, directory()).is_err());
}
