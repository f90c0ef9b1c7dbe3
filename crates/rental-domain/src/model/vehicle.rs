//! Vehicle record type

use rental_types::VehicleId;
use serde::{Deserialize, Serialize};

/// A rentable vehicle with its per-day tariff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Sequential registry ID, never reused
    pub id: VehicleId,
    /// Free-text category (e.g., "Car", "Bike")
    pub kind: String,
    /// Model or display name
    pub model: String,
    /// Tariff charged per rental day
    pub rate_per_day: f64,
    /// False exactly while an active booking references this vehicle
    pub available: bool,
}
