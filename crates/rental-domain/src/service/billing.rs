//! Rental billing math
//!
//! Day counts are inclusive of both endpoints: a same-day rental is
//! charged as one full day.

use chrono::NaiveDate;

/// Inclusive day count between two dates. Callers guarantee `end >= start`,
/// so the result is at least 1.
pub fn chargeable_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Total cost for a rental period at the given per-day tariff
pub fn rental_cost(start: NaiveDate, end: NaiveDate, rate_per_day: f64) -> f64 {
    chargeable_days(start, end) as f64 * rate_per_day
}
