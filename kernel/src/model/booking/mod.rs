pub mod event;

use crate::model::id::{BookingId, CustomerId, FlightId};

/// A booking stores only the keys of its flight and customer. The views in
/// both directions are resolved per query against the authoritative booking
/// collection, so there is no cyclic reference graph to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub flight_id: FlightId,
    pub customer_id: CustomerId,
    pub ticket_number: String,
}
