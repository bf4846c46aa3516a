//! Auth Module
//!
//! Issues and verifies bearer tokens and owns the principal store.
//!
//! ## Layout
//!
//! - `domain/` - token codec, password hashing, credential verifier
//! - `infra/storage/` - in-memory [`IdentityStore`](auth_sdk::IdentityStore)
//! - `api/rest/` - `POST /auth/login` and `POST /auth/register`
//!
//! The gateway consumes this module only through the SDK traits returned by
//! [`AuthModule::token_verifier`] and [`AuthModule::identity_store`].

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use config::{AuthConfig, TokenConfig};
pub use domain::service::CredentialVerifier;
pub use domain::token::TokenCodec;
pub use module::AuthModule;
