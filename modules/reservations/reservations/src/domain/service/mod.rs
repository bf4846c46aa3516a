//! Domain services.
//!
//! One generic [`ResourceService`] drives all five families; bookings add
//! trip and passenger lookups on top.

use std::sync::Arc;

use reservations_sdk::{Booking, Bus, Driver, Passenger, Trip};

use crate::config::ReservationsConfig;
use crate::infra::storage::InMemoryCollection;

pub mod bookings;
pub mod resource;

pub use bookings::BookingFilter;
pub use resource::ResourceService;

pub type Drivers = ResourceService<Driver, InMemoryCollection<Driver>>;
pub type Buses = ResourceService<Bus, InMemoryCollection<Bus>>;
pub type Passengers = ResourceService<Passenger, InMemoryCollection<Passenger>>;
pub type Trips = ResourceService<Trip, InMemoryCollection<Trip>>;
pub type Bookings = ResourceService<Booking, InMemoryCollection<Booking>>;

/// Services shared by the REST handlers.
pub struct ReservationServices {
    pub drivers: Drivers,
    pub buses: Buses,
    pub passengers: Passengers,
    pub trips: Trips,
    pub bookings: Bookings,
    pub paging: ReservationsConfig,
}

impl ReservationServices {
    pub fn in_memory(paging: ReservationsConfig) -> Self {
        Self {
            drivers: ResourceService::new(Arc::new(InMemoryCollection::new())),
            buses: ResourceService::new(Arc::new(InMemoryCollection::new())),
            passengers: ResourceService::new(Arc::new(InMemoryCollection::new())),
            trips: ResourceService::new(Arc::new(InMemoryCollection::new())),
            bookings: ResourceService::new(Arc::new(InMemoryCollection::new())),
            paging,
        }
    }
}
