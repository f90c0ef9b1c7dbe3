//! Error types for rental-desk

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{BookingId, CustomerId, VehicleId};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No such vehicle: ID {0}")]
    VehicleNotFound(VehicleId),

    #[error("No such customer: ID {0}")]
    CustomerNotFound(CustomerId),

    #[error("No such booking: ID {0}")]
    BookingNotFound(BookingId),

    #[error("Vehicle {0} is not available currently")]
    VehicleUnavailable(VehicleId),

    #[error("Cannot remove vehicle {0}: it has an active booking")]
    VehicleHasActiveBooking(VehicleId),

    #[error("End date {end} cannot be before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Booking {0} was already returned")]
    AlreadyReturned(BookingId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
