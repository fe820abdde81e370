use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    flight::{
        event::{CreateFlight, UpdateFlight},
        Flight,
    },
    id::FlightId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
    #[garde(length(min = 1))]
    pub flight_number: String,
    #[garde(length(min = 1))]
    pub departure_city: String,
    #[garde(length(min = 1))]
    pub arrival_city: String,
    #[garde(length(min = 1))]
    pub aircraft_type: String,
    #[garde(skip)]
    pub departure_date: DateTime<Utc>,
    #[garde(skip)]
    pub arrival_date: DateTime<Utc>,
}

impl From<CreateFlightRequest> for CreateFlight {
    fn from(value: CreateFlightRequest) -> Self {
        let CreateFlightRequest {
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        } = value;
        CreateFlight {
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightRequest {
    #[garde(length(min = 1))]
    pub flight_number: String,
    #[garde(length(min = 1))]
    pub departure_city: String,
    #[garde(length(min = 1))]
    pub arrival_city: String,
    #[garde(length(min = 1))]
    pub aircraft_type: String,
    #[garde(skip)]
    pub departure_date: DateTime<Utc>,
    #[garde(skip)]
    pub arrival_date: DateTime<Utc>,
}

#[derive(new)]
pub struct UpdateFlightRequestWithId(FlightId, UpdateFlightRequest);

impl From<UpdateFlightRequestWithId> for UpdateFlight {
    fn from(value: UpdateFlightRequestWithId) -> Self {
        let UpdateFlightRequestWithId(
            flight_id,
            UpdateFlightRequest {
                flight_number,
                departure_city,
                arrival_city,
                aircraft_type,
                departure_date,
                arrival_date,
            },
        ) = value;
        UpdateFlight {
            flight_id,
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub id: FlightId,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub aircraft_type: String,
    pub departure_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub booking_count: usize,
}

impl From<Flight> for FlightResponse {
    fn from(value: Flight) -> Self {
        let Flight {
            id,
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
            booking_count,
        } = value;
        Self {
            id,
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
