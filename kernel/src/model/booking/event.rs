use crate::model::id::{BookingId, CustomerId, FlightId};

pub struct CreateBooking {
    pub flight_id: FlightId,
    pub customer_id: CustomerId,
    pub ticket_number: String,
}

#[derive(Debug)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub flight_id: FlightId,
    pub customer_id: CustomerId,
    pub ticket_number: String,
}
