//! Domain services

pub mod billing;

pub use billing::{chargeable_days, rental_cost};
