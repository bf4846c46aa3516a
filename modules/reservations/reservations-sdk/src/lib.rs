//! Reservations SDK
//!
//! Models for the five resource families managed by the reservations module.
//! Each family has a stored shape carrying the store-assigned `id` and a
//! `New*` shape used for both creation and full replacement.

pub mod models;

pub use models::{
    Booking, Bus, Driver, NewBooking, NewBus, NewDriver, NewPassenger, NewTrip, Passenger, Trip,
};
