pub mod event;

use crate::model::id::CustomerId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: CustomerId,
    pub passport: String,
    pub full_name: String,
    pub birth_date: DateTime<Utc>,
    // Derived, see Flight::booking_count.
    pub booking_count: usize,
}

impl Customer {
    /// One-line passenger summary used by the per-flight passenger query.
    pub fn passenger_line(&self) -> String {
        format!(
            "Passenger: {}, Passport: {}, Birth date: {}",
            self.full_name,
            self.passport,
            self.birth_date.format("%Y-%m-%d"),
        )
    }
}
