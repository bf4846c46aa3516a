use std::sync::Arc;

use auth_sdk::{IdentityStore, TokenVerifier};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use bustation_http::Problem;
use bustation_security::SecurityContext;
use http::{HeaderMap, StatusCode, header};

use crate::config::ApiGatewayConfig;

const BEARER_PREFIX: &str = "Bearer ";

/// Whether a route requires authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// No authentication required (public route).
    None,
    /// Authentication required.
    Required,
}

/// Public/protected split of the URL space.
///
/// A prefix matches on whole path segments: `/auth` covers `/auth` and
/// `/auth/login` but not `/authors`.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    public_prefixes: Arc<[String]>,
    require_auth_by_default: bool,
}

impl RoutePolicy {
    pub fn new<I, S>(public_prefixes: I, require_auth_by_default: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let public_prefixes = public_prefixes
            .into_iter()
            .map(|p| p.as_ref().trim_end_matches('/').to_owned())
            .collect();
        Self {
            public_prefixes,
            require_auth_by_default,
        }
    }

    #[must_use]
    pub fn from_config(cfg: &ApiGatewayConfig) -> Self {
        Self::new(&cfg.public_prefixes, cfg.require_auth_by_default)
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }

    /// Resolve the authentication requirement for a request path.
    pub fn resolve(&self, path: &str) -> AuthRequirement {
        if self.require_auth_by_default && !self.is_public(path) {
            AuthRequirement::Required
        } else {
            AuthRequirement::None
        }
    }
}

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<dyn TokenVerifier>,
    pub identities: Arc<dyn IdentityStore>,
    pub policy: RoutePolicy,
}

/// Extract the bearer token from the `Authorization` header.
///
/// Only the exact `Bearer ` prefix is accepted.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
}

/// Resolve the caller behind a request's bearer token.
///
/// Returns `None` for a missing or rejected token, for a subject that no
/// longer exists and for identity store failures. None of these reject the
/// request here; that decision belongs to [`authz_middleware`].
pub async fn authenticate(state: &AuthState, headers: &HeaderMap) -> Option<SecurityContext> {
    let token = extract_bearer_token(headers)?;

    let login = match state.tokens.verify(token) {
        Ok(login) => login,
        Err(err) => {
            tracing::debug!(%err, "bearer token rejected");
            return None;
        }
    };

    match state.identities.find_by_login(&login).await {
        Ok(Some(principal)) => Some(
            SecurityContext::builder()
                .subject(&principal.login)
                .authority(&principal.role)
                .bearer_token(token.to_owned())
                .build(),
        ),
        Ok(None) => {
            tracing::debug!(login = %login, "token subject not found");
            None
        }
        Err(err) => {
            tracing::error!(error = %err, "identity lookup failed during authentication");
            None
        }
    }
}

/// Request authenticator.
///
/// Every request leaves with a [`SecurityContext`] installed. Public paths
/// get the anonymous context without any header being read. On other paths
/// the resolved caller is installed, or the anonymous context when there is
/// none. The request is always forwarded.
pub async fn authn_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    let ctx = if state.policy.is_public(req.uri().path()) {
        SecurityContext::anonymous()
    } else {
        authenticate(&state, req.headers())
            .await
            .unwrap_or_else(SecurityContext::anonymous)
    };
    req.extensions_mut().insert(ctx);
    next.run(req).await
}

/// Access policy check. Runs inside [`authn_middleware`].
///
/// A protected path without an authenticated caller gets `401`. The
/// response does not reveal whether a token was missing or rejected.
pub async fn authz_middleware(
    State(policy): State<RoutePolicy>,
    req: Request,
    next: Next,
) -> Response {
    if policy.resolve(req.uri().path()) == AuthRequirement::None {
        return next.run(req).await;
    }

    let authenticated = req
        .extensions()
        .get::<SecurityContext>()
        .is_some_and(SecurityContext::is_authenticated);
    if authenticated {
        next.run(req).await
    } else {
        unauthorized().into_response()
    }
}

fn unauthorized() -> Problem {
    Problem::new(
        StatusCode::UNAUTHORIZED,
        "Unauthorized",
        "Full authentication is required to access this resource",
    )
}
