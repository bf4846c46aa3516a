use bustation_http::{Page, PageRequest};
use reservations_sdk::Booking;
use tracing::instrument;

use super::ResourceService;
use crate::domain::error::DomainError;
use crate::domain::repo::DocumentRepository;

/// Optional equality filters on bookings. Both set means both must match.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub trip_id: Option<String>,
    pub passenger_id: Option<String>,
}

impl BookingFilter {
    fn matches(&self, b: &Booking) -> bool {
        self.trip_id.as_deref().is_none_or(|t| b.trip_id == t)
            && self.passenger_id.as_deref().is_none_or(|p| b.passenger_id == p)
    }
}

impl<R: DocumentRepository<Booking>> ResourceService<Booking, R> {
    #[instrument(skip_all, fields(trip_id = ?filter.trip_id, passenger_id = ?filter.passenger_id))]
    pub async fn list_bookings(
        &self,
        page: PageRequest,
        filter: &BookingFilter,
    ) -> Result<Page<Booking>, DomainError> {
        self.list_where(page, |b| filter.matches(b)).await
    }
}
