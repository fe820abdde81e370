use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        Customer,
    },
    id::CustomerId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[garde(length(min = 1))]
    pub passport: String,
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(skip)]
    pub birth_date: DateTime<Utc>,
}

impl From<CreateCustomerRequest> for CreateCustomer {
    fn from(value: CreateCustomerRequest) -> Self {
        let CreateCustomerRequest {
            passport,
            full_name,
            birth_date,
        } = value;
        CreateCustomer {
            passport,
            full_name,
            birth_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[garde(length(min = 1))]
    pub passport: String,
    #[garde(length(min = 1))]
    pub full_name: String,
    #[garde(skip)]
    pub birth_date: DateTime<Utc>,
}

#[derive(new)]
pub struct UpdateCustomerRequestWithId(CustomerId, UpdateCustomerRequest);

impl From<UpdateCustomerRequestWithId> for UpdateCustomer {
    fn from(value: UpdateCustomerRequestWithId) -> Self {
        let UpdateCustomerRequestWithId(
            customer_id,
            UpdateCustomerRequest {
                passport,
                full_name,
                birth_date,
            },
        ) = value;
        UpdateCustomer {
            customer_id,
            passport,
            full_name,
            birth_date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub passport: String,
    pub full_name: String,
    pub birth_date: DateTime<Utc>,
    pub booking_count: usize,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let Customer {
            id,
            passport,
            full_name,
            birth_date,
            booking_count,
        } = value;
        Self {
            id,
            passport,
            full_name,
            birth_date,
            booking_count,
        }
    }
}
