use std::sync::Arc;

use anyhow::Context as _;
use auth_sdk::{IdentityStore, TokenVerifier};
use axum::Router;
use tracing::info;
use utoipa::OpenApi as _;

use crate::api::rest::routes::{self, AuthApiDoc};
use crate::config::AuthConfig;
use crate::domain::service::{CredentialPolicy, CredentialVerifier};
use crate::domain::token::TokenCodec;
use crate::infra::storage::InMemoryIdentityStore;

/// Wired auth module: codec, store and verifier built from one config.
pub struct AuthModule {
    codec: Arc<TokenCodec>,
    store: Arc<dyn IdentityStore>,
    service: Arc<CredentialVerifier>,
}

impl AuthModule {
    /// Build the module over the in-memory identity store.
    pub fn from_config(cfg: &AuthConfig) -> anyhow::Result<Self> {
        Self::with_store(cfg, Arc::new(InMemoryIdentityStore::new()))
    }

    pub fn with_store(cfg: &AuthConfig, store: Arc<dyn IdentityStore>) -> anyhow::Result<Self> {
        let codec = Arc::new(
            TokenCodec::from_config(&cfg.token).context("invalid auth.token configuration")?,
        );
        let service = Arc::new(CredentialVerifier::new(
            Arc::clone(&store),
            Arc::clone(&codec),
            CredentialPolicy::from_config(cfg),
        ));

        info!(
            ttl = %humantime::format_duration(codec.ttl()),
            default_role = %cfg.default_role,
            "auth module initialized"
        );

        Ok(Self {
            codec,
            store,
            service,
        })
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.codec) as Arc<dyn TokenVerifier>
    }

    pub fn identity_store(&self) -> Arc<dyn IdentityStore> {
        Arc::clone(&self.store)
    }

    pub fn codec(&self) -> Arc<TokenCodec> {
        Arc::clone(&self.codec)
    }

    pub fn service(&self) -> Arc<CredentialVerifier> {
        Arc::clone(&self.service)
    }

    pub fn router(&self) -> Router {
        routes::router(Arc::clone(&self.service))
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        AuthApiDoc::openapi()
    }
}
