use std::sync::Arc;

use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::customer::CustomerRepositoryImpl;
use adapter::repository::flight::FlightRepositoryImpl;
use adapter::store::EntityStore;
use kernel::repository::booking::BookingRepository;
use kernel::repository::customer::CustomerRepository;
use kernel::repository::flight::FlightRepository;

#[derive(Clone)]
pub struct AppRegistry {
    flight_repository: Arc<dyn FlightRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
    booking_repository: Arc<dyn BookingRepository>,
}

impl AppRegistry {
    pub fn new(store: Arc<EntityStore>) -> Self {
        let flight_repository = Arc::new(FlightRepositoryImpl::new(store.clone()));
        let customer_repository = Arc::new(CustomerRepositoryImpl::new(store.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(store.clone()));
        Self {
            flight_repository,
            customer_repository,
            booking_repository,
        }
    }

    pub fn flight_repository(&self) -> Arc<dyn FlightRepository> {
        self.flight_repository.clone()
    }

    pub fn customer_repository(&self) -> Arc<dyn CustomerRepository> {
        self.customer_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }
}
