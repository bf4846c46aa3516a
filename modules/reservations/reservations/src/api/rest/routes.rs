use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::handlers::{bookings, buses, drivers, passengers, trips};
use crate::domain::service::ReservationServices;

#[derive(OpenApi)]
#[openapi(
    paths(
        drivers::list_drivers, drivers::get_driver, drivers::create_driver,
        drivers::update_driver, drivers::delete_driver,
        buses::list_buses, buses::get_bus, buses::create_bus,
        buses::update_bus, buses::delete_bus,
        passengers::list_passengers, passengers::get_passenger, passengers::create_passenger,
        passengers::update_passenger, passengers::delete_passenger,
        trips::list_trips, trips::get_trip, trips::create_trip,
        trips::update_trip, trips::delete_trip,
        bookings::list_bookings, bookings::get_booking, bookings::create_booking,
        bookings::update_booking, bookings::delete_booking,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "drivers", description = "Bus drivers"),
        (name = "buses", description = "Fleet"),
        (name = "passengers", description = "Registered passengers"),
        (name = "trips", description = "Scheduled trips"),
        (name = "bookings", description = "Seat bookings on trips"),
    )
)]
pub struct ReservationsApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router(services: Arc<ReservationServices>) -> Router {
    Router::new()
        .route(
            "/drivers",
            get(drivers::list_drivers).post(drivers::create_driver),
        )
        .route(
            "/drivers/{id}",
            get(drivers::get_driver)
                .put(drivers::update_driver)
                .delete(drivers::delete_driver),
        )
        .route("/buses", get(buses::list_buses).post(buses::create_bus))
        .route(
            "/buses/{id}",
            get(buses::get_bus)
                .put(buses::update_bus)
                .delete(buses::delete_bus),
        )
        .route(
            "/passengers",
            get(passengers::list_passengers).post(passengers::create_passenger),
        )
        .route(
            "/passengers/{id}",
            get(passengers::get_passenger)
                .put(passengers::update_passenger)
                .delete(passengers::delete_passenger),
        )
        .route("/trips", get(trips::list_trips).post(trips::create_trip))
        .route(
            "/trips/{id}",
            get(trips::get_trip)
                .put(trips::update_trip)
                .delete(trips::delete_trip),
        )
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/bookings/{id}",
            get(bookings::get_booking)
                .put(bookings::update_booking)
                .delete(bookings::delete_booking),
        )
        .layer(Extension(services))
}
