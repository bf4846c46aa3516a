//! Auth SDK
//!
//! Contract shared between the auth module and its consumers (primarily the
//! API gateway):
//!
//! - [`IdentityStore`] - keyed lookup of principals by login
//! - [`TokenVerifier`] - bearer token verification
//! - [`Principal`] / [`NewPrincipal`] - principal model
//! - [`InvalidToken`] / [`IdentityStoreError`] - error types

pub mod api;
pub mod error;
pub mod models;

pub use api::{IdentityStore, TokenVerifier};
pub use error::{IdentityStoreError, InvalidToken};
pub use models::{DEFAULT_ROLE, NewPrincipal, Principal};
