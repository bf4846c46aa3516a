use async_trait::async_trait;

use crate::error::{IdentityStoreError, InvalidToken};
use crate::models::{NewPrincipal, Principal};

/// Keyed principal store. Logins are unique.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_login(&self, login: &str) -> Result<Option<Principal>, IdentityStoreError>;

    async fn exists_by_login(&self, login: &str) -> Result<bool, IdentityStoreError>;

    /// Persist a new principal and assign its id.
    ///
    /// # Errors
    ///
    /// - `DuplicateLogin` if the login is already taken. The check and the
    ///   insert happen as one step, so of two concurrent saves for the same
    ///   login exactly one succeeds.
    /// - `Unavailable` when the backing store fails.
    async fn save(&self, principal: NewPrincipal) -> Result<Principal, IdentityStoreError>;
}

/// Verifies a raw bearer token (without the `Bearer ` prefix) and returns the
/// subject it was issued for.
///
/// Verification is pure: no I/O and no shared mutable state.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<String, InvalidToken>;
}
