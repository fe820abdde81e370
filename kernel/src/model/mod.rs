pub mod booking;
pub mod customer;
pub mod flight;
pub mod id;
