use chrono::{DateTime, Utc};
use kernel::model::{customer::Customer, id::CustomerId};

#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub customer_id: CustomerId,
    pub passport: String,
    pub full_name: String,
    pub birth_date: DateTime<Utc>,
}

impl CustomerRow {
    pub fn into_customer(self, booking_count: usize) -> Customer {
        let CustomerRow {
            customer_id,
            passport,
            full_name,
            birth_date,
        } = self;
        Customer {
            id: customer_id,
            passport,
            full_name,
            birth_date,
            booking_count,
        }
    }
}
