use std::collections::BTreeSet;

use secrecy::SecretString;

/// `SecurityContext` is the authentication result attached to a single request.
///
/// The request authenticator installs one only after a bearer token verified and
/// its subject resolved to a known principal. A request without one is
/// unauthenticated. Nothing here outlives the request it was built for.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SecurityContext {
    /// Login of the authenticated principal. `None` for the anonymous context.
    subject: Option<String>,
    /// Granted authorities. Currently the principal's single role.
    #[serde(default)]
    authorities: BTreeSet<String>,
    /// Bearer token the context was resolved from. Never serialized.
    #[serde(skip)]
    bearer_token: Option<SecretString>,
}

impl SecurityContext {
    #[must_use]
    pub fn builder() -> SecurityContextBuilder {
        SecurityContextBuilder::default()
    }

    /// Context with no subject and no authorities.
    #[must_use]
    pub fn anonymous() -> Self {
        SecurityContextBuilder::default().build()
    }

    /// Login of the authenticated principal.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    #[must_use]
    pub fn authorities(&self) -> &BTreeSet<String> {
        &self.authorities
    }

    #[must_use]
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.subject.is_some()
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<&SecretString> {
        self.bearer_token.as_ref()
    }
}

#[derive(Default)]
pub struct SecurityContextBuilder {
    subject: Option<String>,
    authorities: BTreeSet<String>,
    bearer_token: Option<SecretString>,
}

impl SecurityContextBuilder {
    #[must_use]
    pub fn subject(mut self, login: &str) -> Self {
        self.subject = Some(login.to_owned());
        self
    }

    #[must_use]
    pub fn authority(mut self, authority: &str) -> Self {
        self.authorities.insert(authority.to_owned());
        self
    }

    #[must_use]
    pub fn bearer_token(mut self, token: impl Into<SecretString>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityContext {
        SecurityContext {
            subject: self.subject,
            authorities: self.authorities,
            bearer_token: self.bearer_token,
        }
    }
}
