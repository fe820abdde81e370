use crate::model::id::CustomerId;
use chrono::{DateTime, Utc};

pub struct CreateCustomer {
    pub passport: String,
    pub full_name: String,
    pub birth_date: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UpdateCustomer {
    pub customer_id: CustomerId,
    pub passport: String,
    pub full_name: String,
    pub birth_date: DateTime<Utc>,
}
