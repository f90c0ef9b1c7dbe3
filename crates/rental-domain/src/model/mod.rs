//! Domain entity types

pub mod booking;
pub mod customer;
pub mod vehicle;

pub use booking::Booking;
pub use customer::Customer;
pub use vehicle::Vehicle;
