//! Compact HS256 bearer tokens carrying a subject and an expiry.

use std::time::Duration;

use auth_sdk::{InvalidToken, TokenVerifier};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use super::error::DomainError;
use crate::config::TokenConfig;

/// Smallest accepted HMAC key, in decoded bytes.
pub const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Why a token was refused. Only ever logged; callers see [`InvalidToken`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenRejection {
    #[error("malformed token")]
    Malformed,
    #[error("signature mismatch")]
    BadSignature,
    #[error("token expired")]
    Expired,
}

#[derive(Debug, Error)]
pub enum TokenConfigError {
    #[error("auth.token.secret must be set")]
    MissingSecret,
    #[error("auth.token.secret is not valid base64: {0}")]
    SecretEncoding(#[from] base64::DecodeError),
    #[error("auth.token.secret decodes to {len} bytes, at least {MIN_SECRET_BYTES} required")]
    SecretTooShort { len: usize },
    #[error("auth.token.ttl is invalid: {0}")]
    Ttl(#[from] humantime::DurationError),
    #[error("auth.token.ttl must be greater than zero")]
    ZeroTtl,
}

/// Signs and verifies bearer tokens with one symmetric key.
///
/// Expiry is checked here against an explicit clock reading with no leeway: a
/// token is valid only while `now < exp`.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn from_config(cfg: &TokenConfig) -> Result<Self, TokenConfigError> {
        let ttl = humantime::parse_duration(&cfg.ttl)?;
        Self::new(cfg.secret.expose_secret(), ttl)
    }

    pub fn new(secret_b64: &str, ttl: Duration) -> Result<Self, TokenConfigError> {
        if secret_b64.trim().is_empty() {
            return Err(TokenConfigError::MissingSecret);
        }
        if ttl.is_zero() {
            return Err(TokenConfigError::ZeroTtl);
        }
        let key = STANDARD.decode(secret_b64.trim())?;
        if key.len() < MIN_SECRET_BYTES {
            return Err(TokenConfigError::SecretTooShort { len: key.len() });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["sub", "iat", "exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(&key),
            decoding: DecodingKey::from_secret(&key),
            validation,
            ttl,
        })
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, login: &str) -> Result<String, DomainError> {
        self.issue_at(login, OffsetDateTime::now_utc())
    }

    pub fn issue_at(&self, login: &str, now: OffsetDateTime) -> Result<String, DomainError> {
        let iat = now.unix_timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: login.to_owned(),
            iat,
            exp: iat.saturating_add(ttl),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| DomainError::internal(format!("token signing failed: {e}")))
    }

    pub fn verify_at(&self, token: &str, now: OffsetDateTime) -> Result<String, TokenRejection> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenRejection::BadSignature
                }
                ErrorKind::ExpiredSignature => TokenRejection::Expired,
                _ => TokenRejection::Malformed,
            })?;

        if now.unix_timestamp() >= data.claims.exp {
            return Err(TokenRejection::Expired);
        }
        Ok(data.claims.sub)
    }
}

impl TokenVerifier for TokenCodec {
    fn verify(&self, token: &str) -> Result<String, InvalidToken> {
        self.verify_at(token, OffsetDateTime::now_utc())
            .map_err(|reason| {
                debug!(%reason, "token rejected");
                InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use time::macros::datetime;

    use super::*;

    const SECRET: &str = "dGhpcy1pcy1hLXRlc3Qtc2VjcmV0LXdpdGgtMzItYnl0ZXMhIQ==";
    const OTHER_SECRET: &str = "YW5vdGhlci10ZXN0LXNlY3JldC13aXRoLTMyLWJ5dGVzISE=";

    fn codec(ttl: Duration) -> TokenCodec {
        TokenCodec::new(SECRET, ttl).unwrap()
    }

    #[test]
    fn round_trip_returns_subject_unmodified() {
        let codec = codec(Duration::from_secs(3600));
        for login in ["u1", "ana.souza", "josé", "with space"] {
            let token = codec.issue(login).unwrap();
            assert_eq!(token.split('.').count(), 3);
            assert_eq!(codec.verify(&token).unwrap(), login);
        }
    }

    #[test]
    fn expires_exactly_at_ttl_without_leeway() {
        let codec = codec(Duration::from_secs(60));
        let issued = datetime!(2030-01-01 12:00:00 UTC);
        let token = codec.issue_at("u1", issued).unwrap();

        assert_eq!(
            codec.verify_at(&token, issued + Duration::from_secs(59)),
            Ok("u1".to_owned())
        );
        assert_eq!(
            codec.verify_at(&token, issued + Duration::from_secs(60)),
            Err(TokenRejection::Expired)
        );
        assert_eq!(
            codec.verify_at(&token, issued + Duration::from_secs(61)),
            Err(TokenRejection::Expired)
        );
    }

    #[test]
    fn token_from_the_past_is_invalid_now() {
        let codec = codec(Duration::from_secs(60));
        let token = codec
            .issue_at("u1", datetime!(2020-01-01 00:00:00 UTC))
            .unwrap();

        assert_eq!(codec.verify(&token), Err(InvalidToken));
    }

    #[test]
    fn tampered_payload_fails_signature() {
        let codec = codec(Duration::from_secs(3600));
        let token = codec.issue("u1").unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        let forged_claims = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&serde_json::json!({
                "sub": "admin",
                "iat": OffsetDateTime::now_utc().unix_timestamp(),
                "exp": OffsetDateTime::now_utc().unix_timestamp() + 3600,
            }))
            .unwrap(),
        );
        let forged = format!("{}.{}.{}", parts[0], forged_claims, parts[2]);

        assert_eq!(
            codec.verify_at(&forged, OffsetDateTime::now_utc()),
            Err(TokenRejection::BadSignature)
        );
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let codec = codec(Duration::from_secs(3600));
        let token = codec.issue("u1").unwrap();
        let (head, sig) = token.rsplit_once('.').unwrap();
        let flipped = if sig.starts_with('A') { 'B' } else { 'A' };
        let forged = format!("{head}.{flipped}{}", &sig[1..]);

        assert!(codec.verify(&forged).is_err());
    }

    #[test]
    fn token_signed_with_other_key_is_rejected() {
        let issuer = TokenCodec::new(OTHER_SECRET, Duration::from_secs(3600)).unwrap();
        let token = issuer.issue("u1").unwrap();

        assert_eq!(
            codec(Duration::from_secs(3600)).verify_at(&token, OffsetDateTime::now_utc()),
            Err(TokenRejection::BadSignature)
        );
    }

    #[test]
    fn garbage_is_malformed() {
        let codec = codec(Duration::from_secs(3600));
        for raw in ["", "abc", "a.b", "a.b.c", "Bearer x.y.z"] {
            assert_eq!(
                codec.verify_at(raw, OffsetDateTime::now_utc()),
                Err(TokenRejection::Malformed),
                "{raw}"
            );
        }
    }

    #[test]
    fn rejects_weak_or_missing_secret() {
        let ttl = Duration::from_secs(60);
        assert!(matches!(
            TokenCodec::new("", ttl),
            Err(TokenConfigError::MissingSecret)
        ));
        assert!(matches!(
            TokenCodec::new("c2hvcnQ=", ttl),
            Err(TokenConfigError::SecretTooShort { len: 5 })
        ));
        assert!(matches!(
            TokenCodec::new("%%%not base64%%%", ttl),
            Err(TokenConfigError::SecretEncoding(_))
        ));
        assert!(matches!(
            TokenCodec::new(SECRET, Duration::ZERO),
            Err(TokenConfigError::ZeroTtl)
        ));
    }

    #[test]
    fn from_config_parses_humantime_ttl() {
        let cfg = TokenConfig {
            secret: SECRET.to_owned().into(),
            ttl: "15m".to_owned(),
        };
        let codec = TokenCodec::from_config(&cfg).unwrap();
        assert_eq!(codec.ttl(), Duration::from_secs(900));

        let bad = TokenConfig {
            secret: SECRET.to_owned().into(),
            ttl: "soon".to_owned(),
        };
        assert!(matches!(
            TokenCodec::from_config(&bad),
            Err(TokenConfigError::Ttl(_))
        ));
    }
}
