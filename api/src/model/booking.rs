use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, CustomerId, FlightId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub flight_id: FlightId,
    #[garde(skip)]
    pub customer_id: CustomerId,
    #[garde(length(min = 1))]
    pub ticket_number: String,
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest {
            flight_id,
            customer_id,
            ticket_number,
        } = value;
        CreateBooking {
            flight_id,
            customer_id,
            ticket_number,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    pub flight_id: FlightId,
    #[garde(skip)]
    pub customer_id: CustomerId,
    #[garde(length(min = 1))]
    pub ticket_number: String,
}

#[derive(new)]
pub struct UpdateBookingRequestWithId(BookingId, UpdateBookingRequest);

impl From<UpdateBookingRequestWithId> for UpdateBooking {
    fn from(value: UpdateBookingRequestWithId) -> Self {
        let UpdateBookingRequestWithId(
            booking_id,
            UpdateBookingRequest {
                flight_id,
                customer_id,
                ticket_number,
            },
        ) = value;
        UpdateBooking {
            booking_id,
            flight_id,
            customer_id,
            ticket_number,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub customer_id: CustomerId,
    pub flight_id: FlightId,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            id,
            flight_id,
            customer_id,
            ticket_number: _,
        } = value;
        Self {
            id,
            customer_id,
            flight_id,
        }
    }
}
