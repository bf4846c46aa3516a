use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};
use bustation_http::{FieldViolation, Problem};
use utoipa::OpenApi;

use super::dto::{LoginReq, PrincipalDto, RegisterReq, TokenDto};
use super::handlers;
use crate::domain::service::CredentialVerifier;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::login, handlers::register),
    components(schemas(LoginReq, TokenDto, RegisterReq, PrincipalDto, Problem, FieldViolation)),
    tags((name = "auth", description = "Token issuance and registration"))
)]
pub struct AuthApiDoc;

pub fn router(svc: Arc<CredentialVerifier>) -> Router {
    Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/register", post(handlers::register))
        .layer(Extension(svc))
}
