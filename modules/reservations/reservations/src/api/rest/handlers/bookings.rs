use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use bustation_http::{ApiResult, Page, PageQuery, Problem};
use bustation_security::SecurityContext;
use http::StatusCode;

use super::location;
use crate::api::rest::dto::{BookingDto, BookingListQuery, BookingReq};
use crate::domain::service::{BookingFilter, ReservationServices};

/// List bookings, optionally filtered by trip or passenger
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Page of bookings", body = Page<BookingDto>),
        (status = 401, description = "Not authenticated", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn list_bookings(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Query(query): Query<BookingListQuery>,
) -> ApiResult<Json<Page<BookingDto>>> {
    let page = svc.page_request(PageQuery {
        page: query.page,
        size: query.size,
    });
    let filter = BookingFilter {
        trip_id: query.trip_id,
        passenger_id: query.passenger_id,
    };
    let page = svc.bookings.list_bookings(page, &filter).await?;
    Ok(Json(page.map(BookingDto::from)))
}

/// Get a booking by id
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking found", body = BookingDto),
        (status = 404, description = "Unknown booking", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), booking.id = %id))]
pub async fn get_booking(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<Json<BookingDto>> {
    Ok(Json(svc.bookings.get(&id).await?.into()))
}

/// Create a booking
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = BookingReq,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default()))]
pub async fn create_booking(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Json(req): Json<BookingReq>,
) -> ApiResult<impl IntoResponse> {
    let booking = svc.bookings.create(req.into()).await?;
    let headers = location("bookings", &booking.id);
    Ok((StatusCode::CREATED, headers, Json(BookingDto::from(booking))))
}

/// Replace a booking
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    request_body = BookingReq,
    responses(
        (status = 200, description = "Booking replaced", body = BookingDto),
        (status = 400, description = "Invalid booking", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Unknown booking", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), booking.id = %id))]
pub async fn update_booking(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
    Json(req): Json<BookingReq>,
) -> ApiResult<Json<BookingDto>> {
    Ok(Json(svc.bookings.update(&id, req.into()).await?.into()))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = String, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Unknown booking", body = Problem, content_type = "application/problem+json"),
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(skip_all, fields(user = ctx.subject().unwrap_or_default(), booking.id = %id))]
pub async fn delete_booking(
    Extension(ctx): Extension<SecurityContext>,
    Extension(svc): Extension<Arc<ReservationServices>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    svc.bookings.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
