use axum::{
    extract::{Path, State},
    Json,
};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::analytics::{BookingStatisticsResponse, FlightBookingCountResponse};

pub async fn show_top_flights(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<FlightBookingCountResponse>>> {
    registry
        .flight_repository()
        .top_flights_by_bookings()
        .await
        .map(|counts| {
            counts
                .into_iter()
                .map(FlightBookingCountResponse::from)
                .collect()
        })
        .map(Json)
}

pub async fn show_max_bookings_flights(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<String>>> {
    registry
        .flight_repository()
        .flights_with_max_bookings()
        .await
        .map(Json)
}

pub async fn show_booking_statistics(
    Path(departure_city): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingStatisticsResponse>> {
    registry
        .flight_repository()
        .booking_statistics_by_city(departure_city)
        .await
        .map(BookingStatisticsResponse::from)
        .map(Json)
}
