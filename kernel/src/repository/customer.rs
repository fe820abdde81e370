use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        Customer,
    },
    id::CustomerId,
};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Customer>>;
    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Option<Customer>>;
    async fn create(&self, event: CreateCustomer) -> AppResult<Customer>;
    async fn update(&self, event: UpdateCustomer) -> AppResult<Customer>;
    async fn delete(&self, customer_id: CustomerId) -> AppResult<bool>;
}
