use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::flight::{
    delete_flight, register_flight, show_flight, show_flight_list, update_flight,
};

pub fn build_flight_routers() -> Router<AppRegistry> {
    let flight_routers = Router::new()
        .route("/", post(register_flight))
        .route("/", get(show_flight_list))
        .route("/:flight_id", get(show_flight))
        .route("/:flight_id", put(update_flight))
        .route("/:flight_id", delete(delete_flight));

    Router::new().nest("/Flight", flight_routers)
}
