//! Booking record type

use chrono::NaiveDate;
use rental_types::{BookingId, CustomerId, VehicleId};
use serde::{Deserialize, Serialize};

/// A rental booking joining a vehicle and a customer over a date range.
///
/// References are by ID only; the booking engine resolves them against
/// the registries at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub vehicle_id: VehicleId,
    pub customer_id: CustomerId,
    pub start_date: NaiveDate,
    /// Planned end date; overwritten with the actual return date on return
    pub end_date: NaiveDate,
    pub total_cost: f64,
    /// One-way flag: false (active) -> true (returned)
    pub returned: bool,
}

impl Booking {
    /// An active booking has not been returned yet
    pub fn is_active(&self) -> bool {
        !self.returned
    }
}
