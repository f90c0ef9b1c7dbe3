//! Shared identifier types
//!
//! Each registry assigns IDs from its own counter, starting at 1.
//! The aliases keep signatures readable where several ID kinds meet.

/// Vehicle registry ID
pub type VehicleId = u32;

/// Customer registry ID
pub type CustomerId = u32;

/// Booking ledger ID
pub type BookingId = u32;
