//! Application use cases

pub mod rental_service;

pub use rental_service::{Invoice, RentalService};
