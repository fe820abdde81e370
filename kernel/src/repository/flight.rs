use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::{
    flight::{
        event::{CreateFlight, UpdateFlight},
        BookingStatistics, Flight, FlightBookingCount,
    },
    id::FlightId,
};

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Flight>>;
    async fn find_by_id(&self, flight_id: FlightId) -> AppResult<Option<Flight>>;
    async fn create(&self, event: CreateFlight) -> AppResult<Flight>;
    // Fails with EntityNotFound when no flight exists under the event's key.
    async fn update(&self, event: UpdateFlight) -> AppResult<Flight>;
    // Returns false when there was nothing to delete.
    async fn delete(&self, flight_id: FlightId) -> AppResult<bool>;

    // Read-only analytics over the flight/booking graph.

    // One summary line per flight, in storage order.
    async fn all_flights_info(&self) -> AppResult<Vec<String>>;
    // Passenger lines for one flight, sorted by full name ascending.
    // Unknown flight or a flight without bookings yields an empty list.
    async fn customers_by_flight(&self, flight_id: FlightId) -> AppResult<Vec<String>>;
    // Exact match on departure city and on the calendar date of departure.
    async fn flights_by_city_and_date(
        &self,
        departure_city: String,
        date: NaiveDate,
    ) -> AppResult<Vec<String>>;
    // At most five entries, booking count descending, ties in storage order.
    async fn top_flights_by_bookings(&self) -> AppResult<Vec<FlightBookingCount>>;
    // Every flight whose booking count equals the maximum.
    async fn flights_with_max_bookings(&self) -> AppResult<Vec<String>>;
    // (min, average, max) of booking counts for the city, (0, 0, 0) when
    // no flight departs from it.
    async fn booking_statistics_by_city(
        &self,
        departure_city: String,
    ) -> AppResult<BookingStatistics>;
}
