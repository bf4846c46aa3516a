use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use bustation_http::{ApiResult, Page, PageQuery, Problem};
use bustation_security::SecurityContext;
use http::StatusCode;

use super::location;
use crate::api::rest::dto::{BusDto, BusReq};
use crate::domain::service::ReservationServices;

/// List buses
#[utoipa::path(
    get,
    path = "/buses",
    tag = "buses",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of buses", body = Page<BusDto>),
        (status = 401, description = "Not authenticated", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn list_buses(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<BusDto>>> {
    let page = svc.buses.list(svc.page_request(query)).await?;
    Ok(Json(page.map(BusDto::from)))
}

/// Get a bus by id
#[utoipa::path(
    get,
    path = "/buses/{id}",
    tag = "buses",
    params(("id" = String, Path, description = "Bus id")),
    responses(
        (status = 200, description = "Bus found", body = BusDto),
        (status = 404, description = "Unknown bus", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), bus.id = %id))]
pub async fn get_bus(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<Json<BusDto>> {
    Ok(Json(svc.buses.get(&id).await?.into()))
}

/// Create a bus
#[utoipa::path(
    post,
    path = "/buses",
    tag = "buses",
    request_body = BusReq,
    responses(
        (status = 201, description = "Bus created", body = BusDto),
        (status = 400, description = "Invalid bus", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn create_bus(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Json(req): Json<BusReq>,
) -> ApiResult<impl IntoResponse> {
    let bus = svc.buses.create(req.into()).await?;
    let headers = location("buses", &bus.id);
    Ok((StatusCode::CREATED, headers, Json(BusDto::from(bus))))
}

/// Replace a bus
#[utoipa::path(
    put,
    path = "/buses/{id}",
    tag = "buses",
    params(("id" = String, Path, description = "Bus id")),
    request_body = BusReq,
    responses(
        (status = 200, description = "Bus replaced", body = BusDto),
        (status = 400, description = "Invalid bus", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown bus", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), bus.id = %id))]
pub async fn update_bus(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
    Json(req): Json<BusReq>,
) -> ApiResult<Json<BusDto>> {
    Ok(Json(svc.buses.update(&id, req.into()).await?.into()))
}

/// Delete a bus
#[utoipa::path(
    delete,
    path = "/buses/{id}",
    tag = "buses",
    params(("id" = String, Path, description = "Bus id")),
    responses(
        (status = 204, description = "Bus deleted"),
        (status = 404, description = "Unknown bus", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), bus.id = %id))]
pub async fn delete_bus(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    svc.buses.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
