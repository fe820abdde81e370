use chrono::{DateTime, Utc};
use kernel::model::{flight::Flight, id::FlightId};

/// Stored shape of a flight. The booking count is not part of the row; it
/// is supplied at materialization time from the booking collection.
#[derive(Debug, Clone)]
pub struct FlightRow {
    pub flight_id: FlightId,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub aircraft_type: String,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
}

impl FlightRow {
    pub fn into_flight(self, booking_count: usize) -> Flight {
        let FlightRow {
            flight_id,
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        } = self;
        Flight {
            id: flight_id,
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
            booking_count,
        }
    }
}
