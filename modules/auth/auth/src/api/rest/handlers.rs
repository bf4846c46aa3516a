use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Extension, Json};
use bustation_http::{ApiResult, Problem};

use super::dto::{LoginReq, PrincipalDto, RegisterReq, TokenDto};
use crate::domain::service::CredentialVerifier;

/// Exchange a login/secret pair for a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 401, description = "Invalid credentials", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(login = %req.login))]
pub async fn login(
    Extension(svc): Extension<Arc<CredentialVerifier>>,
    Json(req): Json<LoginReq>,
) -> ApiResult<Json<TokenDto>> {
    let token = svc.authenticate(&req.login, &req.secret).await?;
    Ok(Json(TokenDto { token }))
}

/// Register a new principal
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterReq,
    responses(
        (status = 201, description = "Principal created", body = PrincipalDto),
        (status = 400, description = "Invalid login or secret", body = Problem, content_type = "application/problem+json"),
        (status = 409, description = "Login already exists", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(login = %req.login))]
pub async fn register(
    Extension(svc): Extension<Arc<CredentialVerifier>>,
    Json(req): Json<RegisterReq>,
) -> ApiResult<(StatusCode, Json<PrincipalDto>)> {
    let principal = svc
        .register(&req.login, &req.secret, req.role.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(PrincipalDto::from(principal))))
}
