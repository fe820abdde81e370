pub mod event;

use crate::model::id::FlightId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Flight {
    pub id: FlightId,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub aircraft_type: String,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    // Derived from the booking collection when the flight is materialized,
    // never stored alongside the flight itself.
    pub booking_count: usize,
}

impl Flight {
    /// One-line route summary used by the flight listing queries.
    pub fn info_line(&self) -> String {
        format!(
            "Flight: {}, From: {}, To: {}, Departure: {}, Arrival: {}, Aircraft: {}",
            self.flight_number,
            self.departure_city,
            self.arrival_city,
            self.departure_date.format("%Y-%m-%d %H:%M:%S"),
            self.arrival_date.format("%Y-%m-%d %H:%M:%S"),
            self.aircraft_type,
        )
    }

    /// Route summary with the booking count, used by the max-bookings query.
    pub fn bookings_line(&self) -> String {
        format!(
            "Flight: {}, From: {}, To: {}, Bookings: {}",
            self.flight_number, self.departure_city, self.arrival_city, self.booking_count,
        )
    }
}

/// (flight number, booking count) pair returned by the top-5 query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightBookingCount {
    pub flight_number: String,
    pub booking_count: usize,
}

/// Booking-count statistics over the flights departing from one city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingStatistics {
    pub min: usize,
    pub average: f64,
    pub max: usize,
}

impl BookingStatistics {
    /// Sentinel returned when no flight departs from the requested city.
    pub const EMPTY: Self = Self {
        min: 0,
        average: 0.0,
        max: 0,
    };
}
