use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use bustation_http::{ApiResult, Page, PageQuery, Problem};
use bustation_security::SecurityContext;
use http::StatusCode;

use super::location;
use crate::api::rest::dto::{TripDto, TripReq};
use crate::domain::service::ReservationServices;

/// List trips
#[utoipa::path(
    get,
    path = "/trips",
    tag = "trips",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of trips", body = Page<TripDto>),
        (status = 401, description = "Not authenticated", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn list_trips(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<Page<TripDto>>> {
    let page = svc.trips.list(svc.page_request(query)).await?;
    Ok(Json(page.map(TripDto::from)))
}

/// Get a trip by id
#[utoipa::path(
    get,
    path = "/trips/{id}",
    tag = "trips",
    params(("id" = String, Path, description = "Trip id")),
    responses(
        (status = 200, description = "Trip found", body = TripDto),
        (status = 404, description = "Unknown trip", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), trip.id = %id))]
pub async fn get_trip(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<Json<TripDto>> {
    Ok(Json(svc.trips.get(&id).await?.into()))
}

/// Create a trip
#[utoipa::path(
    post,
    path = "/trips",
    tag = "trips",
    request_body = TripReq,
    responses(
        (status = 201, description = "Trip created", body = TripDto),
        (status = 400, description = "Invalid trip", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn create_trip(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Json(req): Json<TripReq>,
) -> ApiResult<impl IntoResponse> {
    let trip = svc.trips.create(req.into()).await?;
    let headers = location("trips", &trip.id);
    Ok((StatusCode::CREATED, headers, Json(TripDto::from(trip))))
}

/// Replace a trip
#[utoipa::path(
    put,
    path = "/trips/{id}",
    tag = "trips",
    params(("id" = String, Path, description = "Trip id")),
    request_body = TripReq,
    responses(
        (status = 200, description = "Trip replaced", body = TripDto),
        (status = 400, description = "Invalid trip", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown trip", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), trip.id = %id))]
pub async fn update_trip(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
    Json(req): Json<TripReq>,
) -> ApiResult<Json<TripDto>> {
    Ok(Json(svc.trips.update(&id, req.into()).await?.into()))
}

/// Delete a trip
#[utoipa::path(
    delete,
    path = "/trips/{id}",
    tag = "trips",
    params(("id" = String, Path, description = "Trip id")),
    responses(
        (status = 204, description = "Trip deleted"),
        (status = 404, description = "Unknown trip", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), trip.id = %id))]
pub async fn delete_trip(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    svc.trips.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
