use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use bustation_http::{ApiResult, Page, PageQuery, Problem};
use bustation_security::SecurityContext;
use http::StatusCode;

use super::location;
use crate::api::rest::dto::{DriverDto, DriverReq};
use crate::domain::service::ReservationServices;

/// List drivers
#[utoipa::path(
    get,
    path = "/drivers",
    tag = "drivers",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of drivers", body = Page<DriverDto>),
        (status = 401, description = "Not authenticated", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn list_drivers(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<DriverDto>>> {
    let page = svc.drivers.list(svc.page_request(query)).await?;
    Ok(Json(page.map(DriverDto::from)))
}

/// Get a driver by id
#[utoipa::path(
    get,
    path = "/drivers/{id}",
    tag = "drivers",
    params(("id" = String, Path, description = "Driver id")),
    responses(
        (status = 200, description = "Driver found", body = DriverDto),
        (status = 404, description = "Unknown driver", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), driver.id = %id))]
pub async fn get_driver(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DriverDto>> {
    Ok(Json(svc.drivers.get(&id).await?.into()))
}

/// Create a driver
#[utoipa::path(
    post,
    path = "/drivers",
    tag = "drivers",
    request_body = DriverReq,
    responses(
        (status = 201, description = "Driver created", body = DriverDto),
        (status = 400, description = "Invalid driver", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn create_driver(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Json(req): Json<DriverReq>,
) -> ApiResult<impl IntoResponse> {
    let driver = svc.drivers.create(req.into()).await?;
    let headers = location("drivers", &driver.id);
    Ok((StatusCode::CREATED, headers, Json(DriverDto::from(driver))))
}

/// Replace a driver
#[utoipa::path(
    put,
    path = "/drivers/{id}",
    tag = "drivers",
    params(("id" = String, Path, description = "Driver id")),
    request_body = DriverReq,
    responses(
        (status = 200, description = "Driver replaced", body = DriverDto),
        (status = 400, description = "Invalid driver", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown driver", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), driver.id = %id))]
pub async fn update_driver(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
    Json(req): Json<DriverReq>,
) -> ApiResult<Json<DriverDto>> {
    Ok(Json(svc.drivers.update(&id, req.into()).await?.into()))
}

/// Delete a driver
#[utoipa::path(
    delete,
    path = "/drivers/{id}",
    tag = "drivers",
    params(("id" = String, Path, description = "Driver id")),
    responses(
        (status = 204, description = "Driver deleted"),
        (status = 404, description = "Unknown driver", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), driver.id = %id))]
pub async fn delete_driver(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    svc.drivers.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
