//! Signed, time-bounded bearer tokens.
//!
//! Tokens are compact JWS strings (`header.claims.signature`, base64url)
//! signed with HMAC-SHA-512 over the process-wide secret. Claims carry the
//! subject (`sub`), the issue time (`iat`) and the expiry (`exp`), both in
//! Unix seconds. Verification is stateless: there is no token registry and no
//! revocation, a token simply stops verifying once `exp` is reached.

use std::time::Duration;

use authn_resolver_sdk::{IssuedToken, TokenError};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use studio_security::Principal;

use super::DomainError;

const ALGORITHM: Algorithm = Algorithm::HS512;

/// Claims every accepted token must carry.
const REQUIRED_CLAIMS: [&str; 2] = ["exp", "sub"];

/// Wire claims. All optional so that a missing claim is reported as
/// `Unsupported` rather than failing JSON decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    iat: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
}

/// The only header field inspected before signature verification.
#[derive(Deserialize)]
struct JoseHeader {
    alg: String,
}

/// Issues and verifies bearer tokens.
///
/// Holds the signing keys derived from the configured secret; the secret itself
/// never leaves this type.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    validity: TimeDelta,
}

impl TokenCodec {
    /// Build a codec from the signing secret and the validity window.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Config` if the secret is empty or the window is too
    /// large to add to a timestamp.
    pub fn new(secret: &SecretString, validity: Duration) -> Result<Self, DomainError> {
        let secret = secret.expose_secret();
        if secret.is_empty() {
            return Err(DomainError::Config("jwt_secret must not be empty".to_owned()));
        }
        let validity = TimeDelta::from_std(validity)
            .map_err(|e| DomainError::Config(format!("invalid token validity: {e}")))?;

        let mut validation = Validation::new(ALGORITHM);
        validation.set_required_spec_claims(&REQUIRED_CLAIMS);
        // Expiry is checked by `check_expiry` with no leeway: `now >= exp` is expired.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            validity,
        })
    }

    /// Sign a token whose subject is the principal's username.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Internal` if the expiry overflows or signing fails.
    pub fn issue(&self, principal: &Principal) -> Result<IssuedToken, DomainError> {
        let now = Utc::now();
        let issued_at = now.timestamp();
        let expires_at = now
            .checked_add_signed(self.validity)
            .ok_or_else(|| DomainError::Internal("token expiry overflows".to_owned()))?
            .timestamp();

        let claims = Claims {
            sub: Some(principal.username().to_owned()),
            iat: Some(issued_at),
            exp: Some(expires_at),
        };
        let token = encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| DomainError::Internal(format!("token signing failed: {e}")))?;

        Ok(IssuedToken {
            token: SecretString::from(token),
            subject: principal.username().to_owned(),
            issued_at: to_datetime(issued_at)?,
            expires_at: to_datetime(expires_at)?,
        })
    }

    /// Verify `raw` and return its subject.
    ///
    /// Checks run in order: structure, signature, required claims, expiry.
    ///
    /// # Errors
    ///
    /// - `Malformed` if `raw` is not a decodable signed token
    /// - `Unsupported` if the header names an algorithm other than HS512
    ///   (including unsigned `none` tokens)
    /// - `InvalidSignature` if the signature does not match the secret
    /// - `Unsupported` if `sub` or `exp` is missing, or `sub` is empty
    /// - `Expired` if the current time is at or past `exp`
    pub fn parse_and_verify(&self, raw: &str) -> Result<String, TokenError> {
        if raw.is_empty() {
            return Err(TokenError::Malformed("empty token".to_owned()));
        }
        check_header(raw)?;

        let data = decode::<Claims>(raw, &self.decoding_key, &self.validation)
            .map_err(|e| classify(&e))?;
        let Claims { sub, exp, .. } = data.claims;

        let exp = exp.ok_or_else(|| missing_claim("exp"))?;
        let sub = sub
            .filter(|s| !s.is_empty())
            .ok_or_else(|| missing_claim("sub"))?;

        check_expiry(exp, Utc::now().timestamp())?;
        Ok(sub)
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("algorithm", &ALGORITHM)
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}

/// Reject tokens that are not three segments with a readable header, then
/// tokens signed with anything but HS512. `jsonwebtoken` cannot parse `none`.
fn check_header(raw: &str) -> Result<(), TokenError> {
    let segments: Vec<&str> = raw.split('.').collect();
    let [header, _, _] = segments.as_slice() else {
        return Err(TokenError::Malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|e| TokenError::Malformed(format!("header is not base64url: {e}")))?;
    let header: JoseHeader = serde_json::from_slice(&bytes)
        .map_err(|e| TokenError::Malformed(format!("header is not JSON: {e}")))?;

    if header.alg != "HS512" {
        return Err(TokenError::Unsupported(format!(
            "unsupported algorithm `{}`",
            header.alg
        )));
    }
    Ok(())
}

fn check_expiry(exp: i64, now: i64) -> Result<(), TokenError> {
    if now >= exp {
        return Err(TokenError::Expired);
    }
    Ok(())
}

fn missing_claim(claim: &str) -> TokenError {
    TokenError::Unsupported(format!("missing required claim `{claim}`"))
}

fn classify(err: &jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::MissingRequiredClaim(claim) => missing_claim(claim),
        ErrorKind::InvalidAlgorithm => {
            TokenError::Unsupported("token is not signed with HS512".to_owned())
        }
        _ => TokenError::Malformed(err.to_string()),
    }
}

fn to_datetime(secs: i64) -> Result<DateTime<Utc>, DomainError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DomainError::Internal(format!("timestamp out of range: {secs}")))
}
