//! Field rules for resource drafts.
//!
//! Every rule is checked and all failures are reported together.

use reservations_sdk::{NewBooking, NewBus, NewDriver, NewPassenger, NewTrip};
use time::OffsetDateTime;

use super::error::{DomainError, Violation};

pub trait Validate {
    /// `now` anchors rules relative to the current time.
    fn validate(&self, now: OffsetDateTime) -> Result<(), DomainError>;
}

struct Violations {
    kind: &'static str,
    found: Vec<Violation>,
}

impl Violations {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            found: Vec::new(),
        }
    }

    fn check(&mut self, ok: bool, field: &'static str, message: &str) -> &mut Self {
        if !ok {
            self.found.push(Violation {
                field,
                message: message.to_owned(),
            });
        }
        self
    }

    fn finish(&mut self) -> Result<(), DomainError> {
        if self.found.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation {
                kind: self.kind,
                violations: std::mem::take(&mut self.found),
            })
        }
    }
}

fn not_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

fn length_within(s: &str, min: usize, max: usize) -> bool {
    not_blank(s) && (min..=max).contains(&s.chars().count())
}

fn digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// `ABC-1234`
fn plate(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 8
        && b[..3].iter().all(u8::is_ascii_uppercase)
        && b[3] == b'-'
        && b[4..].iter().all(u8::is_ascii_digit)
}

fn email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl Validate for NewDriver {
    fn validate(&self, _now: OffsetDateTime) -> Result<(), DomainError> {
        Violations::new("Driver")
            .check(
                length_within(&self.name, 2, 100),
                "name",
                "must be between 2 and 100 characters",
            )
            .check(
                digits(&self.license_number, 11),
                "license_number",
                "must be exactly 11 digits",
            )
            .check(
                matches!(self.license_category.as_str(), "A" | "B" | "C" | "D" | "E"),
                "license_category",
                "must be one of A, B, C, D, E",
            )
            .finish()
    }
}

impl Validate for NewBus {
    fn validate(&self, _now: OffsetDateTime) -> Result<(), DomainError> {
        Violations::new("Bus")
            .check(
                length_within(&self.model, 2, 100),
                "model",
                "must be between 2 and 100 characters",
            )
            .check(plate(&self.plate), "plate", "must match ABC-1234")
            .check(
                (10..=100).contains(&self.capacity),
                "capacity",
                "must be between 10 and 100",
            )
            .finish()
    }
}

impl Validate for NewPassenger {
    fn validate(&self, _now: OffsetDateTime) -> Result<(), DomainError> {
        Violations::new("Passenger")
            .check(
                length_within(&self.name, 3, 100),
                "name",
                "must be between 3 and 100 characters",
            )
            .check(digits(&self.cpf, 11), "cpf", "must be exactly 11 digits")
            .check(email(&self.email), "email", "must be a valid email address")
            .finish()
    }
}

impl Validate for NewTrip {
    fn validate(&self, now: OffsetDateTime) -> Result<(), DomainError> {
        Violations::new("Trip")
            .check(not_blank(&self.origin), "origin", "must not be blank")
            .check(not_blank(&self.destination), "destination", "must not be blank")
            .check(self.departure_at > now, "departure_at", "must be in the future")
            .check(not_blank(&self.bus_id), "bus_id", "must not be blank")
            .check(not_blank(&self.driver_id), "driver_id", "must not be blank")
            .finish()
    }
}

impl Validate for NewBooking {
    fn validate(&self, now: OffsetDateTime) -> Result<(), DomainError> {
        Violations::new("Booking")
            .check(not_blank(&self.passenger_id), "passenger_id", "must not be blank")
            .check(not_blank(&self.trip_id), "trip_id", "must not be blank")
            .check(self.booked_at > now, "booked_at", "must be in the future")
            .check(self.seat >= 1, "seat", "must be at least 1")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use time::macros::datetime;

    use super::*;

    const NOW: OffsetDateTime = datetime!(2030-06-01 10:00:00 UTC);

    fn fields(err: DomainError) -> Vec<&'static str> {
        let DomainError::Validation { violations, .. } = err else {
            unreachable!("expected a validation error");
        };
        violations.into_iter().map(|v| v.field).collect()
    }

    #[test]
    fn driver_rules() {
        let ok = NewDriver {
            name: "Carla Mendes".to_owned(),
            license_number: "12345678901".to_owned(),
            license_category: "D".to_owned(),
        };
        assert!(ok.validate(NOW).is_ok());

        let bad = NewDriver {
            name: "C".to_owned(),
            license_number: "1234567890a".to_owned(),
            license_category: "F".to_owned(),
        };
        assert_eq!(
            fields(bad.validate(NOW).unwrap_err()),
            ["name", "license_number", "license_category"]
        );
    }

    #[test]
    fn bus_rules() {
        let mut bus = NewBus {
            model: "Marcopolo G8".to_owned(),
            plate: "ABC-1234".to_owned(),
            capacity: 44,
        };
        assert!(bus.validate(NOW).is_ok());

        for bad_plate in ["abc-1234", "ABC1234", "AB-12345", "ABC-123", "ÁBC-1234"] {
            bus.plate = bad_plate.to_owned();
            assert_eq!(fields(bus.validate(NOW).unwrap_err()), ["plate"], "{bad_plate}");
        }

        bus.plate = "XYZ-0001".to_owned();
        for (capacity, valid) in [(9, false), (10, true), (100, true), (101, false), (-1, false)] {
            bus.capacity = capacity;
            assert_eq!(bus.validate(NOW).is_ok(), valid, "{capacity}");
        }
    }

    #[test]
    fn passenger_rules() {
        let mut p = NewPassenger {
            name: "Ana Lima".to_owned(),
            cpf: "98765432100".to_owned(),
            email: "ana@example.com".to_owned(),
        };
        assert!(p.validate(NOW).is_ok());

        for bad in ["ana", "ana@", "@example.com", "ana@example", "ana @example.com", "a@b@c.com"] {
            p.email = bad.to_owned();
            assert_eq!(fields(p.validate(NOW).unwrap_err()), ["email"], "{bad}");
        }

        p.email = "ana@example.com".to_owned();
        p.name = "  ".to_owned();
        p.cpf = "123".to_owned();
        assert_eq!(fields(p.validate(NOW).unwrap_err()), ["name", "cpf"]);
    }

    #[test]
    fn trip_must_depart_in_the_future() {
        let mut trip = NewTrip {
            origin: "Recife".to_owned(),
            destination: "Natal".to_owned(),
            departure_at: NOW + Duration::from_secs(3600),
            bus_id: "bus-1".to_owned(),
            driver_id: "drv-1".to_owned(),
        };
        assert!(trip.validate(NOW).is_ok());

        trip.departure_at = NOW;
        assert_eq!(fields(trip.validate(NOW).unwrap_err()), ["departure_at"]);

        trip.departure_at = NOW + Duration::from_secs(60);
        trip.origin = String::new();
        trip.driver_id = " ".to_owned();
        assert_eq!(fields(trip.validate(NOW).unwrap_err()), ["origin", "driver_id"]);
    }

    #[test]
    fn booking_seat_starts_at_one() {
        let mut booking = NewBooking {
            passenger_id: "p-1".to_owned(),
            trip_id: "t-1".to_owned(),
            booked_at: NOW + Duration::from_secs(86_400),
            seat: 1,
        };
        assert!(booking.validate(NOW).is_ok());

        booking.seat = 0;
        assert_eq!(fields(booking.validate(NOW).unwrap_err()), ["seat"]);
    }

    #[test]
    fn booking_date_must_be_in_the_future() {
        let mut booking = NewBooking {
            passenger_id: "p-1".to_owned(),
            trip_id: "t-1".to_owned(),
            booked_at: NOW - Duration::from_secs(86_400),
            seat: 2,
        };
        assert_eq!(fields(booking.validate(NOW).unwrap_err()), ["booked_at"]);

        booking.booked_at = NOW;
        assert_eq!(fields(booking.validate(NOW).unwrap_err()), ["booked_at"]);

        booking.booked_at = NOW + Duration::from_secs(1);
        assert!(booking.validate(NOW).is_ok());
    }
}
