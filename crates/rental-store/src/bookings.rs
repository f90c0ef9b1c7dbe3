//! Booking ledger

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rental_domain::model::Booking;
use rental_types::{BookingId, CustomerId, Error, Result, VehicleId};

/// In-memory booking ledger keyed by sequential ID.
///
/// The ledger only stores records; cross-registry checks (vehicle
/// availability, customer existence) belong to the booking engine.
#[derive(Debug)]
pub struct BookingLedger {
    bookings: BTreeMap<BookingId, Booking>,
    next_id: BookingId,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self {
            bookings: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Record a new active booking and return it
    pub fn create(
        &mut self,
        vehicle_id: VehicleId,
        customer_id: CustomerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_cost: f64,
    ) -> &Booking {
        let id = self.next_id;
        self.next_id += 1;
        let booking = Booking {
            id,
            vehicle_id,
            customer_id,
            start_date,
            end_date,
            total_cost,
            returned: false,
        };
        self.bookings.insert(id, booking);
        &self.bookings[&id]
    }

    pub fn get(&self, id: BookingId) -> Result<&Booking> {
        self.bookings.get(&id).ok_or(Error::BookingNotFound(id))
    }

    pub fn get_mut(&mut self, id: BookingId) -> Result<&mut Booking> {
        self.bookings.get_mut(&id).ok_or(Error::BookingNotFound(id))
    }

    /// The unreturned booking referencing the vehicle, if any.
    ///
    /// At most one can exist, since booking requires the vehicle to be
    /// available and booking flips it unavailable.
    pub fn active_booking_for_vehicle(&self, vehicle_id: VehicleId) -> Option<&Booking> {
        self.bookings
            .values()
            .find(|b| b.vehicle_id == vehicle_id && b.is_active())
    }

    /// True while any unreturned booking references the vehicle
    pub fn has_active_for_vehicle(&self, vehicle_id: VehicleId) -> bool {
        self.active_booking_for_vehicle(vehicle_id).is_some()
    }

    /// Insertion-ordered traversal
    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut ledger = BookingLedger::new();
        let first = ledger
            .create(1, 1, d("2024-01-01"), d("2024-01-03"), 150.0)
            .id;
        let second = ledger
            .create(2, 1, d("2024-01-04"), d("2024-01-04"), 80.0)
            .id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_new_booking_is_active() {
        let mut ledger = BookingLedger::new();
        let booking = ledger.create(1, 1, d("2024-01-01"), d("2024-01-03"), 150.0);
        assert!(booking.is_active());
        assert!(ledger.has_active_for_vehicle(1));
        assert!(!ledger.has_active_for_vehicle(2));
    }

    #[test]
    fn test_active_booking_lookup() {
        let mut ledger = BookingLedger::new();
        ledger.create(1, 1, d("2024-01-01"), d("2024-01-03"), 150.0);
        ledger.create(2, 1, d("2024-01-01"), d("2024-01-02"), 30.0);

        let active = ledger.active_booking_for_vehicle(1).unwrap();
        assert_eq!(active.id, 1);
        assert!(ledger.active_booking_for_vehicle(3).is_none());

        ledger.get_mut(1).unwrap().returned = true;
        assert!(ledger.active_booking_for_vehicle(1).is_none());
    }

    #[test]
    fn test_returned_booking_not_active() {
        let mut ledger = BookingLedger::new();
        ledger.create(1, 1, d("2024-01-01"), d("2024-01-03"), 150.0);
        ledger.get_mut(1).unwrap().returned = true;
        assert!(!ledger.has_active_for_vehicle(1));
    }

    #[test]
    fn test_get_missing() {
        let ledger = BookingLedger::new();
        assert!(matches!(ledger.get(9), Err(Error::BookingNotFound(9))));
    }
}
