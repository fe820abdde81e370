use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::booking::{
    BookingResponse, CreateBookingRequest, UpdateBookingRequest, UpdateBookingRequestWithId,
};

pub async fn register_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    req.validate(&())?;

    registry
        .booking_repository()
        .create(req.into())
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn show_booking_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<BookingResponse>>> {
    registry
        .booking_repository()
        .find_all()
        .await
        .map(|bookings| bookings.into_iter().map(BookingResponse::from).collect())
        .map(Json)
}

pub async fn show_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .map(|booking| match booking {
            Some(booking) => Json(BookingResponse::from(booking)).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        })
}

pub async fn update_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    req.validate(&())?;

    let update_booking = UpdateBookingRequestWithId::new(booking_id, req);
    registry
        .booking_repository()
        .update(update_booking.into())
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn delete_booking(
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .booking_repository()
        .delete(booking_id)
        .await
        .map(|deleted| {
            if deleted {
                StatusCode::OK
            } else {
                StatusCode::NO_CONTENT
            }
        })
}
