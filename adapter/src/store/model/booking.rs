use kernel::model::{
    booking::Booking,
    id::{BookingId, CustomerId, FlightId},
};

#[derive(Debug, Clone)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub flight_id: FlightId,
    pub customer_id: CustomerId,
    pub ticket_number: String,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            flight_id,
            customer_id,
            ticket_number,
        } = value;
        Booking {
            id: booking_id,
            flight_id,
            customer_id,
            ticket_number,
        }
    }
}
