use secrecy::SecretString;

/// An authenticated identity as known to the identity store.
///
/// Built by an identity resolver on lookup and immutable afterwards. The
/// `username` is the token subject; it is unique and compared case-sensitively.
///
/// Equality follows the store's identity semantics: two principals are the
/// same iff they carry the same `id`.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    id: i64,
    username: String,
    first_name: String,
    last_name: String,
    admin: bool,
    /// Comparator input for the login gate. Never serialized; `Debug` redacts it.
    #[serde(skip)]
    password_hash: SecretString,
}

impl Principal {
    #[must_use]
    pub fn builder() -> PrincipalBuilder {
        PrincipalBuilder::default()
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether this principal may perform privileged operations.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    #[must_use]
    pub fn password_hash(&self) -> &SecretString {
        &self.password_hash
    }
}

impl PartialEq for Principal {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Principal {}

#[derive(Default)]
pub struct PrincipalBuilder {
    id: Option<i64>,
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    admin: bool,
    password_hash: Option<SecretString>,
}

impl PrincipalBuilder {
    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_owned());
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: &str) -> Self {
        self.first_name = Some(first_name.to_owned());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: &str) -> Self {
        self.last_name = Some(last_name.to_owned());
        self
    }

    #[must_use]
    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    #[must_use]
    pub fn password_hash(mut self, hash: impl Into<SecretString>) -> Self {
        self.password_hash = Some(hash.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Principal {
        Principal {
            id: self.id.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            admin: self.admin,
            password_hash: self
                .password_hash
                .unwrap_or_else(|| SecretString::from(String::new())),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn user(id: i64, username: &str, admin: bool) -> Principal {
        Principal::builder()
            .id(id)
            .username(username)
            .first_name("First")
            .last_name("User")
            .admin(admin)
            .password_hash("$2b$04$hash".to_owned())
            .build()
    }

    #[test]
    fn builder_keeps_admin_flag() {
        let admin = user(1, "admin@studio.com", true);
        let regular = user(2, "user@studio.com", false);

        assert!(admin.is_admin());
        assert!(!regular.is_admin());
    }

    #[test]
    fn equality_is_by_id() {
        let first = user(1, "user1@studio.com", true);
        let same_id = user(1, "user2@studio.com", false);
        let other = user(2, "user3@studio.com", true);

        assert_eq!(first, same_id);
        assert_ne!(first, other);
        assert_eq!(first, first.clone());
    }

    #[test]
    fn password_hash_is_redacted_and_not_serialized() {
        let p = user(7, "yoga@studio.com", false);

        assert_eq!(p.password_hash().expose_secret(), "$2b$04$hash");
        assert!(!format!("{p:?}").contains("$2b$04$hash"));

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["username"], "yoga@studio.com");
        assert_eq!(json["firstName"], "First");
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn minimal_builder_uses_defaults() {
        let p = Principal::builder().username("solo").build();

        assert_eq!(p.id(), 0);
        assert_eq!(p.username(), "solo");
        assert!(!p.is_admin());
        assert!(p.password_hash().expose_secret().is_empty());
    }
}
