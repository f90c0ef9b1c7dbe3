//! Customer record type

use rental_types::CustomerId;
use serde::{Deserialize, Serialize};

/// A registered customer. Immutable after creation; there is no
/// deletion operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Sequential registry ID, never reused
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
}
