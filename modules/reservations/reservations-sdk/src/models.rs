use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub id: String,
    pub name: String,
    /// National driving licence number, 11 digits.
    pub license_number: String,
    /// Licence category, `A` through `E`.
    pub license_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDriver {
    pub name: String,
    pub license_number: String,
    pub license_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub id: String,
    pub model: String,
    /// Plate in `ABC-1234` form.
    pub plate: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBus {
    pub model: String,
    pub plate: String,
    pub capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub id: String,
    pub name: String,
    /// Taxpayer number, 11 digits.
    pub cpf: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPassenger {
    pub name: String,
    pub cpf: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub departure_at: OffsetDateTime,
    pub bus_id: String,
    pub driver_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrip {
    pub origin: String,
    pub destination: String,
    pub departure_at: OffsetDateTime,
    pub bus_id: String,
    pub driver_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: String,
    pub passenger_id: String,
    pub trip_id: String,
    /// Travel date chosen by the client; always in the future when accepted.
    pub booked_at: OffsetDateTime,
    pub seat: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub passenger_id: String,
    pub trip_id: String,
    pub booked_at: OffsetDateTime,
    pub seat: i32,
}
