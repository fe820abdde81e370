use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use garde::Validate;
use kernel::model::id::FlightId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::flight::{
    CreateFlightRequest, FlightResponse, UpdateFlightRequest, UpdateFlightRequestWithId,
};

pub async fn register_flight(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFlightRequest>,
) -> AppResult<Json<FlightResponse>> {
    req.validate(&())?;

    registry
        .flight_repository()
        .create(req.into())
        .await
        .map(FlightResponse::from)
        .map(Json)
}

pub async fn show_flight_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<FlightResponse>>> {
    registry
        .flight_repository()
        .find_all()
        .await
        .map(|flights| flights.into_iter().map(FlightResponse::from).collect())
        .map(Json)
}

pub async fn show_flight(
    Path(flight_id): Path<FlightId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    registry
        .flight_repository()
        .find_by_id(flight_id)
        .await
        .map(|flight| match flight {
            Some(flight) => Json(FlightResponse::from(flight)).into_response(),
            // An absent row is ordinary data on the read path.
            None => StatusCode::NO_CONTENT.into_response(),
        })
}

pub async fn update_flight(
    Path(flight_id): Path<FlightId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateFlightRequest>,
) -> AppResult<Json<FlightResponse>> {
    req.validate(&())?;

    let update_flight = UpdateFlightRequestWithId::new(flight_id, req);
    registry
        .flight_repository()
        .update(update_flight.into())
        .await
        .map(FlightResponse::from)
        .map(Json)
}

pub async fn delete_flight(
    Path(flight_id): Path<FlightId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .flight_repository()
        .delete(flight_id)
        .await
        .map(|deleted| {
            if deleted {
                StatusCode::OK
            } else {
                StatusCode::NO_CONTENT
            }
        })
}
