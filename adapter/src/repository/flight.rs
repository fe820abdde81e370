use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;

use kernel::model::{
    flight::{
        event::{CreateFlight, UpdateFlight},
        BookingStatistics, Flight, FlightBookingCount,
    },
    id::FlightId,
};
use kernel::repository::flight::FlightRepository;
use shared::error::{AppError, AppResult};

use crate::store::{model::flight::FlightRow, Collections, EntityStore};

#[derive(new)]
pub struct FlightRepositoryImpl {
    store: Arc<EntityStore>,
}

fn materialize(collections: &Collections, row: &FlightRow) -> Flight {
    row.clone()
        .into_flight(collections.booking_count_for_flight(row.flight_id))
}

#[async_trait]
impl FlightRepository for FlightRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Flight>> {
        let collections = self.store.read();
        Ok(collections
            .flights
            .values()
            .map(|row| materialize(&collections, row))
            .collect())
    }

    async fn find_by_id(&self, flight_id: FlightId) -> AppResult<Option<Flight>> {
        let collections = self.store.read();
        Ok(collections
            .flights
            .get(&flight_id)
            .map(|row| materialize(&collections, row)))
    }

    async fn create(&self, event: CreateFlight) -> AppResult<Flight> {
        let mut collections = self.store.write();
        let flight_id = collections.next_flight_id();
        let CreateFlight {
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        } = event;
        let row = FlightRow {
            flight_id,
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        };
        collections.flights.insert(flight_id, row.clone());
        Ok(materialize(&collections, &row))
    }

    async fn update(&self, event: UpdateFlight) -> AppResult<Flight> {
        let mut collections = self.store.write();
        if !collections.flights.contains_key(&event.flight_id) {
            return Err(AppError::EntityNotFound(format!(
                "flight {} was not found",
                event.flight_id
            )));
        }
        let UpdateFlight {
            flight_id,
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        } = event;
        let row = FlightRow {
            flight_id,
            flight_number,
            departure_city,
            arrival_city,
            aircraft_type,
            departure_date,
            arrival_date,
        };
        // In-place replace under the original key. Bookings reference the
        // flight by id only, so they all survive the update untouched.
        collections.flights.insert(flight_id, row.clone());
        Ok(materialize(&collections, &row))
    }

    async fn delete(&self, flight_id: FlightId) -> AppResult<bool> {
        let mut collections = self.store.write();
        if collections.flights.remove(&flight_id).is_none() {
            return Ok(false);
        }
        // Dependent bookings go with the flight.
        collections
            .bookings
            .retain(|_, row| row.flight_id != flight_id);
        Ok(true)
    }

    async fn all_flights_info(&self) -> AppResult<Vec<String>> {
        let collections = self.store.read();
        Ok(collections
            .flights
            .values()
            .map(|row| materialize(&collections, row).info_line())
            .collect())
    }

    async fn customers_by_flight(&self, flight_id: FlightId) -> AppResult<Vec<String>> {
        let collections = self.store.read();
        if !collections.flights.contains_key(&flight_id) {
            return Ok(Vec::new());
        }
        // One entry per booking: a customer holding several bookings on the
        // flight is listed once per booking.
        let mut passengers = collections
            .bookings
            .values()
            .filter(|row| row.flight_id == flight_id)
            .filter_map(|row| collections.customers.get(&row.customer_id))
            .collect::<Vec<_>>();
        passengers.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(passengers
            .into_iter()
            .map(|row| {
                row.clone()
                    .into_customer(collections.booking_count_for_customer(row.customer_id))
                    .passenger_line()
            })
            .collect())
    }

    async fn flights_by_city_and_date(
        &self,
        departure_city: String,
        date: NaiveDate,
    ) -> AppResult<Vec<String>> {
        let collections = self.store.read();
        Ok(collections
            .flights
            .values()
            .filter(|row| {
                row.departure_city == departure_city && row.departure_date.date_naive() == date
            })
            .map(|row| materialize(&collections, row).info_line())
            .collect())
    }

    async fn top_flights_by_bookings(&self) -> AppResult<Vec<FlightBookingCount>> {
        let collections = self.store.read();
        let mut counts = collections
            .flights
            .values()
            .map(|row| FlightBookingCount {
                flight_number: row.flight_number.clone(),
                booking_count: collections.booking_count_for_flight(row.flight_id),
            })
            .collect::<Vec<_>>();
        // Stable sort keeps equally-booked flights in storage order.
        counts.sort_by(|a, b| b.booking_count.cmp(&a.booking_count));
        counts.truncate(5);
        Ok(counts)
    }

    async fn flights_with_max_bookings(&self) -> AppResult<Vec<String>> {
        let collections = self.store.read();
        let Some(max_bookings) = collections
            .flights
            .keys()
            .map(|flight_id| collections.booking_count_for_flight(*flight_id))
            .max()
        else {
            return Ok(Vec::new());
        };
        Ok(collections
            .flights
            .values()
            .map(|row| materialize(&collections, row))
            .filter(|flight| flight.booking_count == max_bookings)
            .map(|flight| flight.bookings_line())
            .collect())
    }

    async fn booking_statistics_by_city(
        &self,
        departure_city: String,
    ) -> AppResult<BookingStatistics> {
        let collections = self.store.read();
        let counts = collections
            .flights
            .values()
            .filter(|row| row.departure_city == departure_city)
            .map(|row| collections.booking_count_for_flight(row.flight_id))
            .collect::<Vec<_>>();
        let (Some(&min), Some(&max)) = (counts.iter().min(), counts.iter().max()) else {
            return Ok(BookingStatistics::EMPTY);
        };
        let average = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
        Ok(BookingStatistics { min, average, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::SeedData;
    use chrono::{TimeZone, Utc};

    fn repo() -> FlightRepositoryImpl {
        FlightRepositoryImpl::new(Arc::new(EntityStore::with_seed(SeedData::demo())))
    }

    fn create_event() -> CreateFlight {
        CreateFlight {
            flight_number: "SU900".into(),
            departure_city: "Сочи".into(),
            arrival_city: "Москва".into(),
            aircraft_type: "Airbus A321".into(),
            departure_date: Utc.with_ymd_and_hms(2023, 10, 20, 9, 0, 0).unwrap(),
            arrival_date: Utc.with_ymd_and_hms(2023, 10, 20, 12, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_the_next_id() -> anyhow::Result<()> {
        let repo = repo();

        let flight = repo.create(create_event()).await?;
        assert_eq!(flight.id, FlightId::new(4));
        assert_eq!(flight.booking_count, 0);

        let found = repo.find_by_id(flight.id).await?;
        assert_eq!(found.map(|f| f.flight_number), Some("SU900".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_in_place_and_keeps_bookings() -> anyhow::Result<()> {
        let repo = repo();

        let updated = repo
            .update(UpdateFlight {
                flight_id: FlightId::new(2),
                flight_number: "SU456A".into(),
                departure_city: "Санкт-Петербург".into(),
                arrival_city: "Казань".into(),
                aircraft_type: "Airbus A320".into(),
                departure_date: Utc.with_ymd_and_hms(2023, 10, 15, 15, 0, 0).unwrap(),
                arrival_date: Utc.with_ymd_and_hms(2023, 10, 15, 17, 0, 0).unwrap(),
            })
            .await?;

        // The update DTO carries no booking list; the three seeded bookings
        // for flight 2 must still be attached afterwards.
        assert_eq!(updated.booking_count, 3);
        assert_eq!(updated.arrival_city, "Казань");

        // Storage order is preserved as well.
        let numbers = repo
            .find_all()
            .await?
            .into_iter()
            .map(|f| f.flight_number)
            .collect::<Vec<_>>();
        assert_eq!(numbers, ["SU123", "SU456A", "SU789"]);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_a_missing_flight_fails() {
        let repo = repo();

        let res = repo
            .update(UpdateFlight {
                flight_id: FlightId::new(42),
                flight_number: "SU000".into(),
                departure_city: "Москва".into(),
                arrival_city: "Сочи".into(),
                aircraft_type: "Boeing 737".into(),
                departure_date: Utc.with_ymd_and_hms(2023, 10, 20, 9, 0, 0).unwrap(),
                arrival_date: Utc.with_ymd_and_hms(2023, 10, 20, 12, 0, 0).unwrap(),
            })
            .await;

        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn delete_cascades_to_bookings() -> anyhow::Result<()> {
        let repo = repo();

        assert!(repo.delete(FlightId::new(2)).await?);
        assert!(!repo.delete(FlightId::new(2)).await?);

        // Bookings 3..=5 belonged to flight 2 and must be gone with it.
        let store = repo.store.read();
        assert_eq!(store.bookings.len(), 2);
        assert_eq!(
            store.booking_count_for_customer(kernel::model::id::CustomerId::new(3)),
            0
        );
        Ok(())
    }

    #[tokio::test]
    async fn all_flights_info_lists_every_flight_in_storage_order() -> anyhow::Result<()> {
        let repo = repo();

        let info = repo.all_flights_info().await?;
        assert_eq!(info.len(), 3);
        assert_eq!(
            info[0],
            "Flight: SU123, From: Москва, To: Санкт-Петербург, \
             Departure: 2023-10-15 10:00:00, Arrival: 2023-10-15 12:00:00, Aircraft: Boeing 737"
        );
        Ok(())
    }

    #[tokio::test]
    async fn customers_by_flight_sorts_by_name_and_keeps_duplicates() -> anyhow::Result<()> {
        let repo = repo();

        // Flight 1 has two bookings, both by customer 1: two identical lines.
        let passengers = repo.customers_by_flight(FlightId::new(1)).await?;
        assert_eq!(
            passengers,
            vec![
                "Passenger: Иванов Иван Иванович, Passport: 1234567890, Birth date: 1990-05-15",
                "Passenger: Иванов Иван Иванович, Passport: 1234567890, Birth date: 1990-05-15",
            ]
        );

        // Flight 2: Иванов sorts before Сидорова, who holds two bookings.
        let passengers = repo.customers_by_flight(FlightId::new(2)).await?;
        assert_eq!(passengers.len(), 3);
        assert!(passengers[0].contains("Иванов Иван Иванович"));
        assert!(passengers[1].contains("Сидорова Анна Сергеевна"));
        assert!(passengers[2].contains("Сидорова Анна Сергеевна"));
        Ok(())
    }

    #[tokio::test]
    async fn customers_by_flight_is_empty_for_missing_or_unbooked_flights() -> anyhow::Result<()> {
        let repo = repo();
        assert!(repo.customers_by_flight(FlightId::new(42)).await?.is_empty());
        assert!(repo.customers_by_flight(FlightId::new(3)).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn flights_by_city_and_date_matches_on_the_calendar_date() -> anyhow::Result<()> {
        let repo = repo();

        // Flight 1 departs 2023-10-15 10:00; the query ignores the time of day.
        let date = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        let flights = repo
            .flights_by_city_and_date("Москва".into(), date)
            .await?;
        assert_eq!(flights.len(), 1);
        assert!(flights[0].starts_with("Flight: SU123"));

        let flights = repo
            .flights_by_city_and_date("Москва".into(), NaiveDate::from_ymd_opt(2023, 10, 16).unwrap())
            .await?;
        assert_eq!(flights.len(), 1);
        assert!(flights[0].starts_with("Flight: SU789"));
        Ok(())
    }

    #[tokio::test]
    async fn top_flights_are_sorted_descending_and_capped_at_five() -> anyhow::Result<()> {
        let repo = repo();

        // Seed three more flights without bookings; only five entries may
        // come back, best-booked first, ties in storage order.
        for _ in 0..3 {
            repo.create(create_event()).await?;
        }

        let top = repo.top_flights_by_bookings().await?;
        assert_eq!(top.len(), 5);
        assert_eq!(
            top[0],
            FlightBookingCount {
                flight_number: "SU456".into(),
                booking_count: 3
            }
        );
        assert_eq!(top[1].flight_number, "SU123");
        assert_eq!(top[2].flight_number, "SU789");
        assert_eq!(top[2].booking_count, 0);
        Ok(())
    }

    #[tokio::test]
    async fn max_bookings_returns_only_the_best_booked_flight() -> anyhow::Result<()> {
        let repo = repo();

        let flights = repo.flights_with_max_bookings().await?;
        assert_eq!(
            flights,
            vec!["Flight: SU456, From: Санкт-Петербург, To: Москва, Bookings: 3"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn max_bookings_is_empty_on_an_empty_store() -> anyhow::Result<()> {
        let repo = FlightRepositoryImpl::new(Arc::new(EntityStore::empty()));
        assert!(repo.flights_with_max_bookings().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn booking_statistics_cover_min_average_max() -> anyhow::Result<()> {
        let repo = repo();

        // Москва has flights 1 (2 bookings) and 3 (0 bookings).
        let stats = repo.booking_statistics_by_city("Москва".into()).await?;
        assert_eq!(
            stats,
            BookingStatistics {
                min: 0,
                average: 1.0,
                max: 2
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn booking_statistics_for_an_unknown_city_are_all_zero() -> anyhow::Result<()> {
        let repo = repo();
        let stats = repo
            .booking_statistics_by_city("NoSuchCity".into())
            .await?;
        assert_eq!(stats, BookingStatistics::EMPTY);
        Ok(())
    }
}
