use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use garde::Validate;
use kernel::model::id::CustomerId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::customer::{
    CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest, UpdateCustomerRequestWithId,
};

pub async fn register_customer(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCustomerRequest>,
) -> AppResult<Json<CustomerResponse>> {
    req.validate(&())?;

    registry
        .customer_repository()
        .create(req.into())
        .await
        .map(CustomerResponse::from)
        .map(Json)
}

pub async fn show_customer_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<CustomerResponse>>> {
    registry
        .customer_repository()
        .find_all()
        .await
        .map(|customers| customers.into_iter().map(CustomerResponse::from).collect())
        .map(Json)
}

pub async fn show_customer(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Response> {
    registry
        .customer_repository()
        .find_by_id(customer_id)
        .await
        .map(|customer| match customer {
            Some(customer) => Json(CustomerResponse::from(customer)).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        })
}

pub async fn update_customer(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateCustomerRequest>,
) -> AppResult<Json<CustomerResponse>> {
    req.validate(&())?;

    let update_customer = UpdateCustomerRequestWithId::new(customer_id, req);
    registry
        .customer_repository()
        .update(update_customer.into())
        .await
        .map(CustomerResponse::from)
        .map(Json)
}

pub async fn delete_customer(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .customer_repository()
        .delete(customer_id)
        .await
        .map(|deleted| {
            if deleted {
                StatusCode::OK
            } else {
                StatusCode::NO_CONTENT
            }
        })
}
