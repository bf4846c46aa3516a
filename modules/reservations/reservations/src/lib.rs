//! Reservations Module
//!
//! CRUD for the five resource families of the bus station: drivers, buses,
//! passengers, trips and bookings. Every route here is protected; handlers
//! receive the caller's [`SecurityContext`](bustation_security::SecurityContext)
//! from the gateway.
//!
//! ## Layout
//!
//! - `domain/` - resource trait, field validation, generic resource service
//! - `infra/storage/` - in-memory document collections
//! - `api/rest/` - DTOs, handlers per family, routes and OpenAPI document

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod module;

pub use config::ReservationsConfig;
pub use module::ReservationsModule;
