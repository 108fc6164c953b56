//! Configuration for the static identity plugin.

use secrecy::SecretString;
use serde::Deserialize;
use studio_security::Principal;

/// Plugin configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticIdentityPluginConfig {
    /// Known users. Usernames must be unique.
    pub users: Vec<UserConfig>,
}

/// A single user entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    pub id: i64,

    /// Login name; matched exactly.
    pub username: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub admin: bool,

    /// bcrypt hash of the user's secret (see `studio-server hash-password`).
    pub password_hash: SecretString,
}

impl From<&UserConfig> for Principal {
    fn from(user: &UserConfig) -> Self {
        Principal::builder()
            .id(user.id)
            .username(&user.username)
            .first_name(&user.first_name)
            .last_name(&user.last_name)
            .admin(user.admin)
            .password_hash(user.password_hash.clone())
            .build()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn optional_profile_fields_default() {
        let cfg: StaticIdentityPluginConfig = serde_json::from_value(serde_json::json!({
            "users": [
                { "id": 3, "username": "user1@studio.com", "password_hash": "$2b$04$abc" }
            ]
        }))
        .unwrap();

        let user = &cfg.users[0];
        assert_eq!(user.id, 3);
        assert!(user.first_name.is_empty());
        assert!(!user.admin);
        assert_eq!(user.password_hash.expose_secret(), "$2b$04$abc");
    }

    #[test]
    fn unknown_user_field_is_rejected() {
        let res: Result<StaticIdentityPluginConfig, _> = serde_json::from_value(serde_json::json!({
            "users": [
                { "id": 3, "username": "u", "password_hash": "h", "password": "plain" }
            ]
        }));

        assert!(res.is_err());
    }

    #[test]
    fn debug_redacts_password_hash() {
        let user = UserConfig {
            id: 1,
            username: "yoga@studio.com".to_owned(),
            first_name: "Admin".to_owned(),
            last_name: "Admin".to_owned(),
            admin: true,
            password_hash: SecretString::from("$2b$04$secret-hash".to_owned()),
        };

        assert!(!format!("{user:?}").contains("secret-hash"));
    }
}
