use std::sync::Arc;

use auth_sdk::{IdentityStore, NewPrincipal, Principal};
use tracing::{debug, info, instrument, warn};

use super::error::DomainError;
use super::password;
use super::token::TokenCodec;
use crate::config::AuthConfig;

/// Registration rules.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    pub default_role: String,
    pub min_login_len: usize,
    pub max_login_len: usize,
    pub min_secret_len: usize,
}

impl CredentialPolicy {
    #[must_use]
    pub fn from_config(cfg: &AuthConfig) -> Self {
        Self {
            default_role: cfg.default_role.clone(),
            min_login_len: cfg.min_login_len.max(1),
            max_login_len: cfg.max_login_len,
            min_secret_len: cfg.min_secret_len.max(1),
        }
    }

    fn validate(&self, login: &str, secret: &str, role: Option<&str>) -> Result<(), DomainError> {
        if login.trim().is_empty() {
            return Err(DomainError::validation("login", "must not be blank"));
        }
        let len = login.chars().count();
        if len < self.min_login_len || len > self.max_login_len {
            return Err(DomainError::validation(
                "login",
                format!(
                    "must be between {} and {} characters",
                    self.min_login_len, self.max_login_len
                ),
            ));
        }
        if secret.chars().count() < self.min_secret_len {
            return Err(DomainError::validation(
                "secret",
                format!("must be at least {} characters", self.min_secret_len),
            ));
        }
        if role.is_some_and(|r| r.trim().is_empty()) {
            return Err(DomainError::validation("role", "must not be blank"));
        }
        Ok(())
    }
}

/// Checks login/secret pairs against stored hashes, mints tokens and
/// registers new principals.
pub struct CredentialVerifier {
    store: Arc<dyn IdentityStore>,
    codec: Arc<TokenCodec>,
    policy: CredentialPolicy,
}

impl CredentialVerifier {
    pub fn new(store: Arc<dyn IdentityStore>, codec: Arc<TokenCodec>, policy: CredentialPolicy) -> Self {
        Self {
            store,
            codec,
            policy,
        }
    }

    /// Returns a fresh token for the principal owning `login`.
    ///
    /// `UnknownPrincipal` and `BadCredentials` are logged distinctly but must be
    /// reported to callers as the same failure. Both take the same hashing work.
    #[instrument(skip_all, fields(login = %login))]
    pub async fn authenticate(&self, login: &str, secret: &str) -> Result<String, DomainError> {
        let principal = self.store.find_by_login(login).await?;

        // Unknown logins still pay for a full comparison.
        let hash = principal
            .as_ref()
            .map_or_else(|| password::UNMATCHABLE_HASH.to_owned(), |p| p.secret_hash.clone());
        let candidate = secret.to_owned();
        let matches = tokio::task::spawn_blocking(move || password::verify_secret(&hash, &candidate))
            .await
            .map_err(|e| DomainError::internal(format!("secret verification task failed: {e}")))?;

        let Some(principal) = principal else {
            warn!(reason = "unknown_principal", "login rejected");
            return Err(DomainError::UnknownPrincipal);
        };
        if !matches {
            warn!(reason = "bad_credentials", "login rejected");
            return Err(DomainError::BadCredentials);
        }

        let token = self.codec.issue(&principal.login)?;
        info!("principal authenticated");
        Ok(token)
    }

    /// Stores a new principal with the given or default role.
    #[instrument(skip_all, fields(login = %login))]
    pub async fn register(
        &self,
        login: &str,
        secret: &str,
        role: Option<&str>,
    ) -> Result<Principal, DomainError> {
        self.policy.validate(login, secret, role)?;

        if self.store.exists_by_login(login).await? {
            debug!("login already taken");
            return Err(DomainError::DuplicateLogin {
                login: login.to_owned(),
            });
        }

        let plain = secret.to_owned();
        let secret_hash = tokio::task::spawn_blocking(move || password::hash_secret(&plain))
            .await
            .map_err(|e| DomainError::internal(format!("secret hashing task failed: {e}")))??;

        let role = role.map_or_else(|| self.policy.default_role.clone(), str::to_owned);
        // The store re-checks uniqueness atomically; a concurrent winner surfaces here.
        let principal = self
            .store
            .save(NewPrincipal {
                login: login.to_owned(),
                secret_hash,
                role,
            })
            .await?;

        info!(principal_id = %principal.id, role = %principal.role, "principal registered");
        Ok(principal)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use auth_sdk::TokenVerifier;
    use tracing_test::traced_test;

    use super::*;
    use crate::infra::storage::memory_repo::InMemoryIdentityStore;

    const SECRET: &str = "dGhpcy1pcy1hLXRlc3Qtc2VjcmV0LXdpdGgtMzItYnl0ZXMhIQ==";

    fn verifier_with(policy: CredentialPolicy) -> (CredentialVerifier, Arc<TokenCodec>) {
        let codec = Arc::new(TokenCodec::new(SECRET, Duration::from_secs(3600)).unwrap());
        let store = Arc::new(InMemoryIdentityStore::new());
        (
            CredentialVerifier::new(store, Arc::clone(&codec), policy),
            codec,
        )
    }

    fn verifier() -> (CredentialVerifier, Arc<TokenCodec>) {
        verifier_with(CredentialPolicy::from_config(&AuthConfig::default()))
    }

    #[tokio::test]
    async fn register_defaults_role_and_login_yields_token() {
        let (svc, codec) = verifier();

        let principal = svc.register("u1", "s1", None).await.unwrap();
        assert_eq!(principal.login, "u1");
        assert_eq!(principal.role, "ROLE_USER");
        assert!(!principal.id.is_empty());
        assert_ne!(principal.secret_hash, "s1");

        let token = svc.authenticate("u1", "s1").await.unwrap();
        assert!(!token.is_empty());
        assert_eq!(codec.verify(&token).unwrap(), "u1");
    }

    #[tokio::test]
    async fn register_keeps_explicit_role() {
        let (svc, _) = verifier();
        let principal = svc.register("boss", "pw", Some("ROLE_ADMIN")).await.unwrap();
        assert_eq!(principal.role, "ROLE_ADMIN");
    }

    #[tokio::test]
    async fn duplicate_login_leaves_first_principal_intact() {
        let (svc, _) = verifier();
        let first = svc.register("u2", "pw", None).await.unwrap();

        let err = svc.register("u2", "other", None).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateLogin { ref login } if login == "u2"));

        assert!(svc.authenticate("u2", "pw").await.is_ok());
        assert!(matches!(
            svc.authenticate("u2", "other").await,
            Err(DomainError::BadCredentials)
        ));
        assert!(!first.id.is_empty());
    }

    #[tokio::test]
    async fn wrong_secret_and_unknown_login_are_both_credential_failures() {
        let (svc, _) = verifier();
        svc.register("u1", "s1", None).await.unwrap();

        let wrong = svc.authenticate("u1", "nope").await.unwrap_err();
        let unknown = svc.authenticate("ghost", "s1").await.unwrap_err();

        assert!(matches!(wrong, DomainError::BadCredentials));
        assert!(matches!(unknown, DomainError::UnknownPrincipal));
        assert!(wrong.is_credential_failure());
        assert!(unknown.is_credential_failure());
    }

    #[tokio::test]
    async fn unknown_login_costs_as_much_as_wrong_secret() {
        let (svc, _) = verifier();
        svc.register("u1", "s1", None).await.unwrap();

        let started = Instant::now();
        for _ in 0..3 {
            assert!(svc.authenticate("u1", "nope").await.is_err());
        }
        let wrong_secret = started.elapsed();

        let started = Instant::now();
        for _ in 0..3 {
            assert!(svc.authenticate("ghost", "nope").await.is_err());
        }
        let unknown_login = started.elapsed();

        assert!(
            unknown_login * 3 >= wrong_secret,
            "unknown login took {unknown_login:?}, wrong secret took {wrong_secret:?}"
        );
    }

    #[tokio::test]
    async fn concurrent_registrations_of_same_login_admit_one() {
        let (svc, _) = verifier();
        let svc = Arc::new(svc);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let svc = Arc::clone(&svc);
                tokio::spawn(async move { svc.register("race", &format!("pw{i}"), None).await })
            })
            .collect();

        let mut results = Vec::new();
        for h in handles {
            results.push(h.await.unwrap());
        }

        let ok = results.iter().filter(|r| r.is_ok()).count();
        let dup = results
            .iter()
            .filter(|r| matches!(r, Err(DomainError::DuplicateLogin { .. })))
            .count();
        assert_eq!(ok, 1);
        assert_eq!(dup, 7);
    }

    #[tokio::test]
    async fn validation_rules_follow_policy() {
        let (svc, _) = verifier_with(CredentialPolicy {
            default_role: "ROLE_USER".to_owned(),
            min_login_len: 3,
            max_login_len: 5,
            min_secret_len: 3,
        });

        for (login, secret, field) in [
            ("   ", "secret", "login"),
            ("ab", "secret", "login"),
            ("abcdef", "secret", "login"),
            ("abc", "xy", "secret"),
        ] {
            let err = svc.register(login, secret, None).await.unwrap_err();
            assert!(
                matches!(err, DomainError::Validation { field: ref f, .. } if f == field),
                "{login}/{secret}: {err}"
            );
        }

        let err = svc.register("abc", "xyz", Some(" ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "role"));
        assert!(svc.register("abc", "xyz", None).await.is_ok());
    }

    #[tokio::test]
    #[traced_test]
    async fn secrets_never_reach_the_logs() {
        let (svc, _) = verifier();
        svc.register("logme", "hunter2-secret", None).await.unwrap();
        let _ = svc.authenticate("logme", "wrong-secret-value").await;
        let _ = svc.authenticate("nobody", "another-secret-value").await;

        assert!(logs_contain("principal registered"));
        assert!(logs_contain("bad_credentials"));
        assert!(logs_contain("unknown_principal"));
        assert!(!logs_contain("hunter2-secret"));
        assert!(!logs_contain("wrong-secret-value"));
        assert!(!logs_contain("another-secret-value"));
    }
}
