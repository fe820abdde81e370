use crate::model::id::FlightId;
use chrono::{DateTime, Utc};

pub struct CreateFlight {
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub aircraft_type: String,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UpdateFlight {
    pub flight_id: FlightId,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub aircraft_type: String,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
}
