//! Handlers per resource family.
//!
//! Every handler runs behind the gateway's authorization check, so the
//! caller's `SecurityContext` is always present.

use http::header;

use crate::domain::service::ReservationServices;
use bustation_http::{PageQuery, PageRequest};

pub mod bookings;
pub mod buses;
pub mod drivers;
pub mod passengers;
pub mod trips;

impl ReservationServices {
    pub(crate) fn page_request(&self, query: PageQuery) -> PageRequest {
        query.resolve(self.paging.default_page_size, self.paging.max_page_size)
    }
}

/// `Location` header for a newly created document.
pub(crate) fn location(collection: &str, id: &str) -> [(header::HeaderName, String); 1] {
    [(header::LOCATION, format!("/{collection}/{id}"))]
}
