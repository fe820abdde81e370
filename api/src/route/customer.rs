use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::customer::{
    delete_customer, register_customer, show_customer, show_customer_list, update_customer,
};

pub fn build_customer_routers() -> Router<AppRegistry> {
    let customer_routers = Router::new()
        .route("/", post(register_customer))
        .route("/", get(show_customer_list))
        .route("/:customer_id", get(show_customer))
        .route("/:customer_id", put(update_customer))
        .route("/:customer_id", delete(delete_customer));

    Router::new().nest("/Customer", customer_routers)
}
