use chrono::{DateTime, TimeZone, Utc};
use kernel::model::id::{BookingId, CustomerId, FlightId};

use super::model::{booking::BookingRow, customer::CustomerRow, flight::FlightRow};

/// Initial contents for an [`EntityStore`](super::EntityStore). Passed by
/// value so every store instance gets its own copy of the rows.
#[derive(Default)]
pub struct SeedData {
    pub flights: Vec<FlightRow>,
    pub customers: Vec<CustomerRow>,
    pub bookings: Vec<BookingRow>,
}

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    // Seed timestamps are fixed literals, so the lookup cannot be ambiguous.
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

impl SeedData {
    /// The canonical demo dataset: three flights, four customers and five
    /// bookings. Flight 1 carries two bookings by the same customer and
    /// flight 2 carries the most bookings overall; several analytics
    /// queries key off those two facts.
    pub fn demo() -> Self {
        let flights = vec![
            FlightRow {
                flight_id: FlightId::new(1),
                flight_number: "SU123".into(),
                departure_city: "Москва".into(),
                arrival_city: "Санкт-Петербург".into(),
                aircraft_type: "Boeing 737".into(),
                departure_date: utc(2023, 10, 15, 10, 0),
                arrival_date: utc(2023, 10, 15, 12, 0),
            },
            FlightRow {
                flight_id: FlightId::new(2),
                flight_number: "SU456".into(),
                departure_city: "Санкт-Петербург".into(),
                arrival_city: "Москва".into(),
                aircraft_type: "Airbus A320".into(),
                departure_date: utc(2023, 10, 15, 14, 0),
                arrival_date: utc(2023, 10, 15, 16, 0),
            },
            FlightRow {
                flight_id: FlightId::new(3),
                flight_number: "SU789".into(),
                departure_city: "Москва".into(),
                arrival_city: "Сочи".into(),
                aircraft_type: "Boeing 777".into(),
                departure_date: utc(2023, 10, 16, 8, 0),
                arrival_date: utc(2023, 10, 16, 11, 0),
            },
        ];

        let customers = vec![
            CustomerRow {
                customer_id: CustomerId::new(1),
                passport: "1234567890".into(),
                full_name: "Иванов Иван Иванович".into(),
                birth_date: utc(1990, 5, 15, 0, 0),
            },
            CustomerRow {
                customer_id: CustomerId::new(2),
                passport: "0987654321".into(),
                full_name: "Петров Петр Петрович".into(),
                birth_date: utc(1985, 8, 25, 0, 0),
            },
            CustomerRow {
                customer_id: CustomerId::new(3),
                passport: "1122334455".into(),
                full_name: "Сидорова Анна Сергеевна".into(),
                birth_date: utc(1995, 3, 10, 0, 0),
            },
            CustomerRow {
                customer_id: CustomerId::new(4),
                passport: "2233445566".into(),
                full_name: "Кузнецов Дмитрий Александрович".into(),
                birth_date: utc(1980, 12, 1, 0, 0),
            },
        ];

        let bookings = vec![
            booking(1, 1, 1, "TICKET123"),
            booking(2, 1, 1, "TICKET456"),
            booking(3, 2, 1, "TICKET789"),
            booking(4, 2, 3, "TICKET101"),
            booking(5, 2, 3, "TICKET112"),
        ];

        Self {
            flights,
            customers,
            bookings,
        }
    }
}

fn booking(id: i64, flight_id: i64, customer_id: i64, ticket_number: &str) -> BookingRow {
    BookingRow {
        booking_id: BookingId::new(id),
        flight_id: FlightId::new(flight_id),
        customer_id: CustomerId::new(customer_id),
        ticket_number: ticket_number.into(),
    }
}
