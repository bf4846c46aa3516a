//! REST DTOs. Field names are the wire contract.

use reservations_sdk::{
    Booking, Bus, Driver, NewBooking, NewBus, NewDriver, NewPassenger, NewTrip, Passenger, Trip,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::{IntoParams, ToSchema};

// ==================== Drivers ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DriverDto {
    pub id: String,
    pub name: String,
    pub license_number: String,
    pub license_category: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DriverReq {
    pub name: String,
    /// Exactly 11 digits.
    pub license_number: String,
    /// One of `A`, `B`, `C`, `D`, `E`.
    pub license_category: String,
}

impl From<Driver> for DriverDto {
    fn from(d: Driver) -> Self {
        Self {
            id: d.id,
            name: d.name,
            license_number: d.license_number,
            license_category: d.license_category,
        }
    }
}

impl From<DriverReq> for NewDriver {
    fn from(r: DriverReq) -> Self {
        Self {
            name: r.name,
            license_number: r.license_number,
            license_category: r.license_category,
        }
    }
}

// ==================== Buses ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BusDto {
    pub id: String,
    pub model: String,
    pub plate: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BusReq {
    pub model: String,
    /// `ABC-1234` form.
    pub plate: String,
    /// Between 10 and 100 seats.
    pub capacity: i32,
}

impl From<Bus> for BusDto {
    fn from(b: Bus) -> Self {
        Self {
            id: b.id,
            model: b.model,
            plate: b.plate,
            capacity: b.capacity,
        }
    }
}

impl From<BusReq> for NewBus {
    fn from(r: BusReq) -> Self {
        Self {
            model: r.model,
            plate: r.plate,
            capacity: r.capacity,
        }
    }
}

// ==================== Passengers ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PassengerDto {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PassengerReq {
    pub name: String,
    /// Exactly 11 digits.
    pub cpf: String,
    pub email: String,
}

impl From<Passenger> for PassengerDto {
    fn from(p: Passenger) -> Self {
        Self {
            id: p.id,
            name: p.name,
            cpf: p.cpf,
            email: p.email,
        }
    }
}

impl From<PassengerReq> for NewPassenger {
    fn from(r: PassengerReq) -> Self {
        Self {
            name: r.name,
            cpf: r.cpf,
            email: r.email,
        }
    }
}

// ==================== Trips ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TripDto {
    pub id: String,
    pub origin: String,
    pub destination: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub departure_at: OffsetDateTime,
    pub bus_id: String,
    pub driver_id: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TripReq {
    pub origin: String,
    pub destination: String,
    /// RFC 3339 timestamp in the future.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub departure_at: OffsetDateTime,
    pub bus_id: String,
    pub driver_id: String,
}

impl From<Trip> for TripDto {
    fn from(t: Trip) -> Self {
        Self {
            id: t.id,
            origin: t.origin,
            destination: t.destination,
            departure_at: t.departure_at,
            bus_id: t.bus_id,
            driver_id: t.driver_id,
        }
    }
}

impl From<TripReq> for NewTrip {
    fn from(r: TripReq) -> Self {
        Self {
            origin: r.origin,
            destination: r.destination,
            departure_at: r.departure_at,
            bus_id: r.bus_id,
            driver_id: r.driver_id,
        }
    }
}

// ==================== Bookings ====================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: String,
    pub passenger_id: String,
    pub trip_id: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub booked_at: OffsetDateTime,
    pub seat: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookingReq {
    pub passenger_id: String,
    pub trip_id: String,
    /// Must be in the future.
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub booked_at: OffsetDateTime,
    /// 1-based seat number.
    pub seat: i32,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            passenger_id: b.passenger_id,
            trip_id: b.trip_id,
            booked_at: b.booked_at,
            seat: b.seat,
        }
    }
}

impl From<BookingReq> for NewBooking {
    fn from(r: BookingReq) -> Self {
        Self {
            passenger_id: r.passenger_id,
            trip_id: r.trip_id,
            booked_at: r.booked_at,
            seat: r.seat,
        }
    }
}

/// Query for `GET /bookings`: paging plus optional filters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingListQuery {
    /// Zero-based page index.
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// Only bookings on this trip.
    pub trip_id: Option<String>,
    /// Only bookings held by this passenger.
    pub passenger_id: Option<String>,
}
