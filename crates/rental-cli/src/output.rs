//! Output formatting for lists and invoices
//!
//! Tables follow the column layout of the legacy console tool; money
//! is always rendered with two decimal places and dates as YYYY-MM-DD.

use std::io::Write;

use rental_app::app::Invoice;
use rental_domain::model::{Booking, Customer, Vehicle};
use rental_types::{OutputFormat, Result};

pub fn write_vehicles<W: Write>(
    out: &mut W,
    format: OutputFormat,
    vehicles: &[&Vehicle],
) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(vehicles)?)?;
        return Ok(());
    }
    writeln!(out, "\nVehicles:")?;
    if vehicles.is_empty() {
        writeln!(out, "  (no vehicles)")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<5} {:<10} {:<18} {:<10} {:<10}",
        "ID", "Type", "Model", "Rate/day", "Available"
    )?;
    for v in vehicles {
        writeln!(
            out,
            "{:<5} {:<10} {:<18} {:<10.2} {:<10}",
            v.id,
            v.kind,
            v.model,
            v.rate_per_day,
            yes_no(v.available)
        )?;
    }
    Ok(())
}

pub fn write_customers<W: Write>(
    out: &mut W,
    format: OutputFormat,
    customers: &[&Customer],
) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(customers)?)?;
        return Ok(());
    }
    writeln!(out, "\nCustomers:")?;
    if customers.is_empty() {
        writeln!(out, "  (no customers)")?;
        return Ok(());
    }
    writeln!(out, "{:<5} {:<20} {:<15}", "ID", "Name", "Phone")?;
    for c in customers {
        writeln!(out, "{:<5} {:<20} {:<15}", c.id, c.name, c.phone)?;
    }
    Ok(())
}

pub fn write_bookings<W: Write>(
    out: &mut W,
    format: OutputFormat,
    bookings: &[&Booking],
) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(bookings)?)?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<5} {:<8} {:<8} {:<12} {:<12} {:<8}",
        "BID", "VehID", "CustID", "Start", "End", "Cost"
    )?;
    for b in bookings {
        writeln!(
            out,
            "{:<5} {:<8} {:<8} {:<12} {:<12} {:<8.2}{}",
            b.id,
            b.vehicle_id,
            b.customer_id,
            b.start_date.to_string(),
            b.end_date.to_string(),
            b.total_cost,
            if b.returned { " (Returned)" } else { "" }
        )?;
    }
    Ok(())
}

pub fn write_invoice<W: Write>(
    out: &mut W,
    format: OutputFormat,
    invoice: &Invoice,
    footer: Option<&str>,
) -> Result<()> {
    if format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(invoice)?)?;
        return Ok(());
    }
    writeln!(out, "\n--- Invoice ---")?;
    writeln!(out, "Booking ID: {}", invoice.booking_id)?;
    writeln!(
        out,
        "Customer: {} (ID {})",
        invoice.customer_name, invoice.customer_id
    )?;
    writeln!(out, "Phone: {}", invoice.customer_phone)?;
    writeln!(
        out,
        "Vehicle: {} - {} (ID {})",
        invoice.vehicle_kind, invoice.vehicle_model, invoice.vehicle_id
    )?;
    writeln!(
        out,
        "Period: {} to {}",
        invoice.start_date, invoice.end_date
    )?;
    writeln!(out, "Days: {}", invoice.days)?;
    writeln!(out, "Rate per day: {:.2}", invoice.rate_per_day)?;
    writeln!(out, "Total: {:.2}", invoice.total_cost)?;
    writeln!(out, "Returned: {}", yes_no(invoice.returned))?;
    if let Some(footer) = footer {
        writeln!(out, "{}", footer)?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
