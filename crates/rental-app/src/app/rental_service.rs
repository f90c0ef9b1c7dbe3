//! Rental Service - Core Use Case for Vehicle Rental Management
//!
//! This service owns the three registries and composes them into the
//! booking workflow:
//! 1. Resolve the vehicle and customer
//! 2. Check availability and the date range
//! 3. Compute the cost from the per-day tariff
//! 4. Record the booking and flip availability
//!
//! Returning a vehicle recomputes the cost from the actual return date
//! and restores availability. Every failure is rejected before any
//! state is touched.

use chrono::NaiveDate;
use serde::Serialize;

use rental_domain::model::{Booking, Customer, Vehicle};
use rental_domain::service::{chargeable_days, rental_cost};
use rental_store::{BookingLedger, CustomerRegistry, VehicleRegistry};
use rental_types::{BookingId, CustomerId, Error, Result, VehicleId};

/// Read-only join of a booking with its vehicle and customer
#[derive(Debug, Clone, Serialize)]
pub struct Invoice {
    pub booking_id: BookingId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub customer_phone: String,
    pub vehicle_id: VehicleId,
    pub vehicle_kind: String,
    pub vehicle_model: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub rate_per_day: f64,
    pub total_cost: f64,
    pub returned: bool,
}

/// In-memory rental state for one process run.
///
/// Counters start at 1 and registries start empty; everything is
/// discarded at process exit.
#[derive(Debug, Default)]
pub struct RentalService {
    vehicles: VehicleRegistry,
    customers: CustomerRegistry,
    bookings: BookingLedger,
}

impl RentalService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vehicle. Rejects non-finite or negative rates.
    pub fn add_vehicle(&mut self, kind: &str, model: &str, rate_per_day: f64) -> Result<&Vehicle> {
        self.vehicles.add(kind, model, rate_per_day)
    }

    /// Delete a vehicle. Blocked while an active booking references it;
    /// returned bookings do not block removal.
    pub fn remove_vehicle(&mut self, id: VehicleId) -> Result<Vehicle> {
        if !self.vehicles.contains(id) {
            return Err(Error::VehicleNotFound(id));
        }
        if self.bookings.has_active_for_vehicle(id) {
            return Err(Error::VehicleHasActiveBooking(id));
        }
        self.vehicles.remove(id)
    }

    pub fn vehicle(&self, id: VehicleId) -> Result<&Vehicle> {
        self.vehicles.get(id)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn add_customer(&mut self, name: &str, phone: &str) -> &Customer {
        self.customers.add(name, phone)
    }

    pub fn customer(&self, id: CustomerId) -> Result<&Customer> {
        self.customers.get(id)
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    /// Book a vehicle for a customer over an inclusive date range.
    ///
    /// The vehicle becomes unavailable until the booking is returned,
    /// which rules out overlapping bookings by construction.
    pub fn book(
        &mut self,
        vehicle_id: VehicleId,
        customer_id: CustomerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<&Booking> {
        let vehicle = self.vehicles.get(vehicle_id)?;
        if !self.customers.contains(customer_id) {
            return Err(Error::CustomerNotFound(customer_id));
        }
        if !vehicle.available {
            return Err(Error::VehicleUnavailable(vehicle_id));
        }
        if end_date < start_date {
            return Err(Error::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        let total = rental_cost(start_date, end_date, vehicle.rate_per_day);

        self.vehicles.get_mut(vehicle_id)?.available = false;
        Ok(self
            .bookings
            .create(vehicle_id, customer_id, start_date, end_date, total))
    }

    /// Return a booked vehicle, recomputing the cost from the actual
    /// return date. `None` means the planned end date.
    ///
    /// The cost is recomputed from the vehicle's current rate, not a
    /// rate captured at booking time (observed legacy behavior, kept).
    pub fn return_vehicle(
        &mut self,
        booking_id: BookingId,
        actual_return: Option<NaiveDate>,
    ) -> Result<&Booking> {
        let booking = self.bookings.get(booking_id)?;
        if booking.returned {
            return Err(Error::AlreadyReturned(booking_id));
        }
        let actual = actual_return.unwrap_or(booking.end_date);
        if actual < booking.start_date {
            return Err(Error::InvalidDateRange {
                start: booking.start_date,
                end: actual,
            });
        }
        let vehicle_id = booking.vehicle_id;
        let start = booking.start_date;
        let rate = self.vehicles.get(vehicle_id)?.rate_per_day;
        let total = rental_cost(start, actual, rate);

        self.vehicles.get_mut(vehicle_id)?.available = true;
        let booking = self.bookings.get_mut(booking_id)?;
        booking.end_date = actual;
        booking.total_cost = total;
        booking.returned = true;
        Ok(booking)
    }

    /// Read-only join across the three registries
    pub fn invoice(&self, booking_id: BookingId) -> Result<Invoice> {
        let booking = self.bookings.get(booking_id)?;
        let vehicle = self.vehicles.get(booking.vehicle_id)?;
        let customer = self.customers.get(booking.customer_id)?;
        Ok(Invoice {
            booking_id: booking.id,
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            vehicle_id: vehicle.id,
            vehicle_kind: vehicle.kind.clone(),
            vehicle_model: vehicle.model.clone(),
            start_date: booking.start_date,
            end_date: booking.end_date,
            days: chargeable_days(booking.start_date, booking.end_date),
            rate_per_day: vehicle.rate_per_day,
            total_cost: booking.total_cost,
            returned: booking.returned,
        })
    }

    pub fn booking(&self, id: BookingId) -> Result<&Booking> {
        self.bookings.get(id)
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}
