use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;

use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        Customer,
    },
    id::CustomerId,
};
use kernel::repository::customer::CustomerRepository;
use shared::error::{AppError, AppResult};

use crate::store::{model::customer::CustomerRow, Collections, EntityStore};

#[derive(new)]
pub struct CustomerRepositoryImpl {
    store: Arc<EntityStore>,
}

fn materialize(collections: &Collections, row: &CustomerRow) -> Customer {
    row.clone()
        .into_customer(collections.booking_count_for_customer(row.customer_id))
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let collections = self.store.read();
        Ok(collections
            .customers
            .values()
            .map(|row| materialize(&collections, row))
            .collect())
    }

    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>> {
        let collections = self.store.read();
        Ok(collections
            .customers
            .get(&customer_id)
            .map(|row| materialize(&collections, row)))
    }

    async fn create(&self, event: CreateCustomer) -> AppResult<Customer> {
        let mut collections = self.store.write();
        let customer_id = collections.next_customer_id();
        let CreateCustomer {
            passport,
            full_name,
            birth_date,
        } = event;
        let row = CustomerRow {
            customer_id,
            passport,
            full_name,
            birth_date,
        };
        collections.customers.insert(customer_id, row.clone());
        Ok(materialize(&collections, &row))
    }

    async fn update(&self, event: UpdateCustomer) -> AppResult<Customer> {
        let mut collections = self.store.write();
        if !collections.customers.contains_key(&event.customer_id) {
            return Err(AppError::EntityNotFound(format!(
                "customer {} was not found",
                event.customer_id
            )));
        }
        let UpdateCustomer {
            customer_id,
            passport,
            full_name,
            birth_date,
        } = event;
        let row = CustomerRow {
            customer_id,
            passport,
            full_name,
            birth_date,
        };
        collections.customers.insert(customer_id, row.clone());
        Ok(materialize(&collections, &row))
    }

    async fn delete(&self, customer_id: CustomerId) -> AppResult<bool> {
        let mut collections = self.store.write();
        if collections.customers.remove(&customer_id).is_none() {
            return Ok(false);
        }
        // Dependent bookings go with the customer.
        collections
            .bookings
            .retain(|_, row| row.customer_id != customer_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::SeedData;
    use chrono::{TimeZone, Utc};

    fn repo() -> CustomerRepositoryImpl {
        CustomerRepositoryImpl::new(Arc::new(EntityStore::with_seed(SeedData::demo())))
    }

    #[tokio::test]
    async fn create_and_find_round_trip() -> anyhow::Result<()> {
        let repo = repo();

        let created = repo
            .create(CreateCustomer {
                passport: "5566778899".into(),
                full_name: "Смирнова Ольга Павловна".into(),
                birth_date: Utc.with_ymd_and_hms(1992, 7, 3, 0, 0, 0).unwrap(),
            })
            .await?;
        assert_eq!(created.id, CustomerId::new(5));
        assert_eq!(created.booking_count, 0);

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 5);

        let found = repo.find_by_id(created.id).await?;
        assert_eq!(
            found.map(|c| c.full_name),
            Some("Смирнова Ольга Павловна".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_the_booking_count() -> anyhow::Result<()> {
        let repo = repo();

        // Customer 1 holds three seeded bookings.
        let updated = repo
            .update(UpdateCustomer {
                customer_id: CustomerId::new(1),
                passport: "1234567890".into(),
                full_name: "Иванов Иван Петрович".into(),
                birth_date: Utc.with_ymd_and_hms(1990, 5, 15, 0, 0, 0).unwrap(),
            })
            .await?;
        assert_eq!(updated.booking_count, 3);
        assert_eq!(updated.full_name, "Иванов Иван Петрович");
        Ok(())
    }

    #[tokio::test]
    async fn update_of_a_missing_customer_fails() {
        let repo = repo();
        let res = repo
            .update(UpdateCustomer {
                customer_id: CustomerId::new(42),
                passport: "0000000000".into(),
                full_name: "Никто".into(),
                birth_date: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
            })
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn delete_cascades_to_bookings() -> anyhow::Result<()> {
        let repo = repo();

        assert!(repo.delete(CustomerId::new(1)).await?);
        assert!(!repo.delete(CustomerId::new(1)).await?);

        // Bookings 1..=3 belonged to customer 1.
        let store = repo.store.read();
        assert_eq!(store.bookings.len(), 2);
        assert_eq!(
            store.booking_count_for_flight(kernel::model::id::FlightId::new(1)),
            0
        );
        Ok(())
    }
}
