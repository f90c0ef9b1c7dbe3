//! Domain models and billing services for rental-desk

pub mod model;
pub mod service;
