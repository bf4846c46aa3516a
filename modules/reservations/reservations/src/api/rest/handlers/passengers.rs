use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use bustation_http::{ApiResult, Page, PageQuery, Problem};
use bustation_security::SecurityContext;
use http::StatusCode;

use super::location;
use crate::api::rest::dto::{PassengerDto, PassengerReq};
use crate::domain::service::ReservationServices;

/// List passengers
#[utoipa::path(
    get,
    path = "/passengers",
    tag = "passengers",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of passengers", body = Page<PassengerDto>),
        (status = 401, description = "Not authenticated", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn list_passengers(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<PassengerDto>>> {
    let page = svc.passengers.list(svc.page_request(query)).await?;
    Ok(Json(page.map(PassengerDto::from)))
}

/// Get a passenger by id
#[utoipa::path(
    get,
    path = "/passengers/{id}",
    tag = "passengers",
    params(("id" = String, Path, description = "Passenger id")),
    responses(
        (status = 200, description = "Passenger found", body = PassengerDto),
        (status = 404, description = "Unknown passenger", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), passenger.id = %id))]
pub async fn get_passenger(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PassengerDto>> {
    Ok(Json(svc.passengers.get(&id).await?.into()))
}

/// Create a passenger
#[utoipa::path(
    post,
    path = "/passengers",
    tag = "passengers",
    request_body = PassengerReq,
    responses(
        (status = 201, description = "Passenger created", body = PassengerDto),
        (status = 400, description = "Invalid passenger", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn create_passenger(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Json(req): Json<PassengerReq>,
) -> ApiResult<impl IntoResponse> {
    let passenger = svc.passengers.create(req.into()).await?;
    let headers = location("passengers", &passenger.id);
    Ok((StatusCode::CREATED, headers, Json(PassengerDto::from(passenger))))
}

/// Replace a passenger
#[utoipa::path(
    put,
    path = "/passengers/{id}",
    tag = "passengers",
    params(("id" = String, Path, description = "Passenger id")),
    request_body = PassengerReq,
    responses(
        (status = 200, description = "Passenger replaced", body = PassengerDto),
        (status = 400, description = "Invalid passenger", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown passenger", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), passenger.id = %id))]
pub async fn update_passenger(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
    Json(req): Json<PassengerReq>,
) -> ApiResult<Json<PassengerDto>> {
    Ok(Json(svc.passengers.update(&id, req.into()).await?.into()))
}

/// Delete a passenger
#[utoipa::path(
    delete,
    path = "/passengers/{id}",
    tag = "passengers",
    params(("id" = String, Path, description = "Passenger id")),
    responses(
        (status = 204, description = "Passenger deleted"),
        (status = 404, description = "Unknown passenger", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), passenger.id = %id))]
pub async fn delete_passenger(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    svc.passengers.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
