use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::analytics::{
    show_booking_statistics, show_max_bookings_flights, show_top_flights,
};

pub fn build_flight_analytics_routers() -> Router<AppRegistry> {
    let analytics_routers = Router::new()
        .route("/Top5Flights", get(show_top_flights))
        .route("/MaxBookingsFlights", get(show_max_bookings_flights))
        .route("/BookingStatistics/:departure_city", get(show_booking_statistics));

    Router::new().nest("/FlightAnalytics", analytics_routers)
}
