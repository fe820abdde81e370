use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;

use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, CustomerId, FlightId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::store::{model::booking::BookingRow, Collections, EntityStore};

#[derive(new)]
pub struct BookingRepositoryImpl {
    store: Arc<EntityStore>,
}

// All-or-nothing reference check: runs before any mutation so a failed
// create or update leaves no partial state behind.
fn check_references(
    collections: &Collections,
    flight_id: FlightId,
    customer_id: CustomerId,
) -> AppResult<()> {
    if !collections.flights.contains_key(&flight_id) {
        return Err(AppError::UnprocessableEntity(format!(
            "flight {flight_id} referenced by the booking was not found"
        )));
    }
    if !collections.customers.contains_key(&customer_id) {
        return Err(AppError::UnprocessableEntity(format!(
            "customer {customer_id} referenced by the booking was not found"
        )));
    }
    Ok(())
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        let collections = self.store.read();
        Ok(collections
            .bookings
            .values()
            .cloned()
            .map(Booking::from)
            .collect())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let collections = self.store.read();
        Ok(collections
            .bookings
            .get(&booking_id)
            .cloned()
            .map(Booking::from))
    }

    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let mut collections = self.store.write();
        check_references(&collections, event.flight_id, event.customer_id)?;

        let booking_id = collections.next_booking_id();
        let CreateBooking {
            flight_id,
            customer_id,
            ticket_number,
        } = event;
        let row = BookingRow {
            booking_id,
            flight_id,
            customer_id,
            ticket_number,
        };
        collections.bookings.insert(booking_id, row.clone());
        Ok(row.into())
    }

    async fn update(&self, event: UpdateBooking) -> AppResult<Booking> {
        let mut collections = self.store.write();
        if !collections.bookings.contains_key(&event.booking_id) {
            return Err(AppError::EntityNotFound(format!(
                "booking {} was not found",
                event.booking_id
            )));
        }
        check_references(&collections, event.flight_id, event.customer_id)?;

        let UpdateBooking {
            booking_id,
            flight_id,
            customer_id,
            ticket_number,
        } = event;
        let row = BookingRow {
            booking_id,
            flight_id,
            customer_id,
            ticket_number,
        };
        // Replacing the row under its original key re-homes the booking:
        // the old flight's and customer's counts drop, the new ones rise,
        // with nothing else to detach.
        collections.bookings.insert(booking_id, row.clone());
        Ok(row.into())
    }

    async fn delete(&self, booking_id: BookingId) -> AppResult<bool> {
        let mut collections = self.store.write();
        Ok(collections.bookings.remove(&booking_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::SeedData;

    fn repo() -> BookingRepositoryImpl {
        BookingRepositoryImpl::new(Arc::new(EntityStore::with_seed(SeedData::demo())))
    }

    fn create_event(flight_id: i64, customer_id: i64) -> CreateBooking {
        CreateBooking {
            flight_id: FlightId::new(flight_id),
            customer_id: CustomerId::new(customer_id),
            ticket_number: "TICKET999".into(),
        }
    }

    #[tokio::test]
    async fn create_attaches_the_booking_to_both_sides() -> anyhow::Result<()> {
        let repo = repo();

        let booking = repo.create(create_event(3, 2)).await?;
        assert_eq!(booking.id, BookingId::new(6));

        let found = repo.find_by_id(booking.id).await?;
        assert_eq!(found, Some(booking));

        let store = repo.store.read();
        assert_eq!(store.booking_count_for_flight(FlightId::new(3)), 1);
        assert_eq!(store.booking_count_for_customer(CustomerId::new(2)), 1);
        Ok(())
    }

    #[tokio::test]
    async fn create_with_a_missing_reference_changes_nothing() -> anyhow::Result<()> {
        let repo = repo();

        let res = repo.create(create_event(42, 1)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        let res = repo.create(create_event(1, 42)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // No orphaned partial writes.
        assert_eq!(repo.find_all().await?.len(), 5);
        let store = repo.store.read();
        assert_eq!(store.booking_count_for_flight(FlightId::new(1)), 2);
        assert_eq!(store.booking_count_for_customer(CustomerId::new(1)), 3);
        Ok(())
    }

    #[tokio::test]
    async fn update_moves_the_booking_between_flights() -> anyhow::Result<()> {
        let repo = repo();

        // Booking 1 moves from flight 1 / customer 1 to flight 3 / customer 4.
        let updated = repo
            .update(UpdateBooking {
                booking_id: BookingId::new(1),
                flight_id: FlightId::new(3),
                customer_id: CustomerId::new(4),
                ticket_number: "TICKET123".into(),
            })
            .await?;
        assert_eq!(updated.flight_id, FlightId::new(3));

        let store = repo.store.read();
        assert_eq!(store.booking_count_for_flight(FlightId::new(1)), 1);
        assert_eq!(store.booking_count_for_flight(FlightId::new(3)), 1);
        assert_eq!(store.booking_count_for_customer(CustomerId::new(1)), 2);
        assert_eq!(store.booking_count_for_customer(CustomerId::new(4)), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_validates_the_key_and_the_references() -> anyhow::Result<()> {
        let repo = repo();

        let res = repo
            .update(UpdateBooking {
                booking_id: BookingId::new(42),
                flight_id: FlightId::new(1),
                customer_id: CustomerId::new(1),
                ticket_number: "TICKET123".into(),
            })
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let res = repo
            .update(UpdateBooking {
                booking_id: BookingId::new(1),
                flight_id: FlightId::new(42),
                customer_id: CustomerId::new(1),
                ticket_number: "TICKET123".into(),
            })
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // The rejected update left the booking on its original flight.
        let booking = repo.find_by_id(BookingId::new(1)).await?;
        assert_eq!(booking.map(|b| b.flight_id), Some(FlightId::new(1)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_detaches_the_booking_from_both_sides() -> anyhow::Result<()> {
        let repo = repo();

        assert!(repo.delete(BookingId::new(1)).await?);
        assert!(!repo.delete(BookingId::new(1)).await?);

        let store = repo.store.read();
        assert_eq!(store.booking_count_for_flight(FlightId::new(1)), 1);
        assert_eq!(store.booking_count_for_customer(CustomerId::new(1)), 2);
        Ok(())
    }
}
