use thiserror::Error;

/// A bearer token was malformed, forged or expired.
///
/// The cause is intentionally not exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid token")]
pub struct InvalidToken;

#[derive(Debug, Error)]
pub enum IdentityStoreError {
    #[error("login '{login}' already exists")]
    DuplicateLogin { login: String },

    #[error("identity store unavailable: {0}")]
    Unavailable(String),
}
