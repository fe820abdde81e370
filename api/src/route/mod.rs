pub mod analytics;
pub mod booking;
pub mod customer;
pub mod flight;
pub mod health;

use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(flight::build_flight_routers())
        .merge(customer::build_customer_routers())
        .merge(booking::build_booking_routers())
        .merge(analytics::build_flight_analytics_routers());
    Router::new()
        .merge(health::build_health_check_routers())
        .nest("/api", router)
}
