use std::sync::Arc;

use axum::Router;
use tracing::info;
use utoipa::OpenApi as _;

use crate::api::rest::routes::{self, ReservationsApiDoc};
use crate::config::ReservationsConfig;
use crate::domain::service::ReservationServices;

/// Wired reservations module over in-memory collections.
pub struct ReservationsModule {
    services: Arc<ReservationServices>,
}

impl ReservationsModule {
    pub fn from_config(cfg: &ReservationsConfig) -> Self {
        info!(
            default_page_size = cfg.default_page_size,
            max_page_size = cfg.max_page_size,
            "reservations module initialized"
        );
        Self {
            services: Arc::new(ReservationServices::in_memory(cfg.clone())),
        }
    }

    pub fn services(&self) -> Arc<ReservationServices> {
        Arc::clone(&self.services)
    }

    pub fn router(&self) -> Router {
        routes::router(Arc::clone(&self.services))
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        ReservationsApiDoc::openapi()
    }
}
