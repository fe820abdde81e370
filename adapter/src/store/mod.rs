pub mod model;
pub mod seed;

use std::collections::BTreeMap;

use kernel::model::id::{BookingId, CustomerId, FlightId};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use self::model::{booking::BookingRow, customer::CustomerRow, flight::FlightRow};
use self::seed::SeedData;

/// The three entity collections, keyed by id. Ids are handed out
/// monotonically, so iterating a map visits rows in creation order; that
/// order is what the listing and tie-breaking rules of the analytics
/// queries rely on.
#[derive(Default)]
pub struct Collections {
    pub flights: BTreeMap<FlightId, FlightRow>,
    pub customers: BTreeMap<CustomerId, CustomerRow>,
    pub bookings: BTreeMap<BookingId, BookingRow>,
}

impl Collections {
    pub fn next_flight_id(&self) -> FlightId {
        self.flights
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(FlightId::new(1))
    }

    pub fn next_customer_id(&self) -> CustomerId {
        self.customers
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(CustomerId::new(1))
    }

    pub fn next_booking_id(&self) -> BookingId {
        self.bookings
            .keys()
            .next_back()
            .map(|id| id.next())
            .unwrap_or(BookingId::new(1))
    }

    /// Booking membership is computed against the authoritative booking map
    /// instead of being mirrored into per-flight collections, so the count
    /// can never drift out of sync with the bookings themselves.
    pub fn booking_count_for_flight(&self, flight_id: FlightId) -> usize {
        self.bookings
            .values()
            .filter(|row| row.flight_id == flight_id)
            .count()
    }

    pub fn booking_count_for_customer(&self, customer_id: CustomerId) -> usize {
        self.bookings
            .values()
            .filter(|row| row.customer_id == customer_id)
            .count()
    }
}

/// In-memory persistence provider shared by the three repositories.
///
/// A single lock serializes writers; every mutation is one lock-scoped map
/// operation, so updates replace rows in place and partially applied writes
/// cannot be observed. Each store owns its data outright: seed data is
/// injected per instance, never shared between instances.
pub struct EntityStore {
    collections: RwLock<Collections>,
}

impl EntityStore {
    pub fn empty() -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
        }
    }

    pub fn with_seed(seed: SeedData) -> Self {
        let SeedData {
            flights,
            customers,
            bookings,
        } = seed;
        let collections = Collections {
            flights: flights.into_iter().map(|row| (row.flight_id, row)).collect(),
            customers: customers
                .into_iter()
                .map(|row| (row.customer_id, row))
                .collect(),
            bookings: bookings
                .into_iter()
                .map(|row| (row.booking_id, row))
                .collect(),
        };
        Self {
            collections: RwLock::new(collections),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_stores_are_independent() {
        let a = EntityStore::with_seed(SeedData::demo());
        let b = EntityStore::with_seed(SeedData::demo());

        a.write().bookings.clear();

        assert_eq!(a.read().bookings.len(), 0);
        assert_eq!(b.read().bookings.len(), 5);
    }

    #[test]
    fn next_ids_start_at_one_on_an_empty_store() {
        let store = EntityStore::empty();
        let collections = store.read();
        assert_eq!(collections.next_flight_id(), FlightId::new(1));
        assert_eq!(collections.next_customer_id(), CustomerId::new(1));
        assert_eq!(collections.next_booking_id(), BookingId::new(1));
    }

    #[test]
    fn next_ids_follow_the_current_maximum() {
        let store = EntityStore::with_seed(SeedData::demo());
        let collections = store.read();
        assert_eq!(collections.next_flight_id(), FlightId::new(4));
        assert_eq!(collections.next_customer_id(), CustomerId::new(5));
        assert_eq!(collections.next_booking_id(), BookingId::new(6));
    }
}
