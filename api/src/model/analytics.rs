use kernel::model::flight::{BookingStatistics, FlightBookingCount};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightBookingCountResponse {
    pub flight_number: String,
    pub booking_count: usize,
}

impl From<FlightBookingCount> for FlightBookingCountResponse {
    fn from(value: FlightBookingCount) -> Self {
        let FlightBookingCount {
            flight_number,
            booking_count,
        } = value;
        Self {
            flight_number,
            booking_count,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStatisticsResponse {
    pub min: usize,
    pub average: f64,
    pub max: usize,
}

impl From<BookingStatistics> for BookingStatisticsResponse {
    fn from(value: BookingStatistics) -> Self {
        let BookingStatistics { min, average, max } = value;
        Self { min, average, max }
    }
}
