use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::BookingId,
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // Both referenced rows must exist; otherwise the create fails with
    // UnprocessableEntity and leaves the store untouched.
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
    // Replaces the booking under its original key after validating the new
    // flight and customer references the same way create does.
    async fn update(&self, event: UpdateBooking) -> AppResult<Booking>;
    async fn delete(&self, booking_id: BookingId) -> AppResult<bool>;
}
