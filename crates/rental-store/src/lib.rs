//! In-memory registries for vehicles, customers, and bookings
//!
//! Each registry maps a sequential ID to a record. IDs start at 1 and
//! only ascend, so key-ordered traversal is insertion order and a
//! removed ID is never handed out again. State lives for one process
//! run; nothing is persisted.

mod bookings;
mod customers;
mod vehicles;

pub use bookings::BookingLedger;
pub use customers::CustomerRegistry;
pub use vehicles::VehicleRegistry;
