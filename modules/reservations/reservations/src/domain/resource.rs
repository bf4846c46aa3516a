use reservations_sdk::{
    Booking, Bus, Driver, NewBooking, NewBus, NewDriver, NewPassenger, NewTrip, Passenger, Trip,
};

use super::validation::Validate;

/// A stored document family.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Shape accepted for creation and full replacement.
    type Draft: Validate + Send + Sync + 'static;

    /// Human-readable family name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Build the stored document under `id`.
    fn from_draft(id: String, draft: Self::Draft) -> Self;
}

impl Resource for Driver {
    type Draft = NewDriver;
    const KIND: &'static str = "Driver";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewDriver) -> Self {
        Self {
            id,
            name: d.name,
            license_number: d.license_number,
            license_category: d.license_category,
        }
    }
}

impl Resource for Bus {
    type Draft = NewBus;
    const KIND: &'static str = "Bus";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewBus) -> Self {
        Self {
            id,
            model: d.model,
            plate: d.plate,
            capacity: d.capacity,
        }
    }
}

impl Resource for Passenger {
    type Draft = NewPassenger;
    const KIND: &'static str = "Passenger";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewPassenger) -> Self {
        Self {
            id,
            name: d.name,
            cpf: d.cpf,
            email: d.email,
        }
    }
}

impl Resource for Trip {
    type Draft = NewTrip;
    const KIND: &'static str = "Trip";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewTrip) -> Self {
        Self {
            id,
            origin: d.origin,
            destination: d.destination,
            departure_at: d.departure_at,
            bus_id: d.bus_id,
            driver_id: d.driver_id,
        }
    }
}

impl Resource for Booking {
    type Draft = NewBooking;
    const KIND: &'static str = "Booking";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, d: NewBooking) -> Self {
        Self {
            id,
            passenger_id: d.passenger_id,
            trip_id: d.trip_id,
            booked_at: d.booked_at,
            seat: d.seat,
        }
    }
}
