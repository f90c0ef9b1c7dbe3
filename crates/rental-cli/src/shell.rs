//! Interactive rental shell
//!
//! Line-oriented menu over stdin/stdout, kept generic over the reader
//! and writer so scripted sessions can drive it in tests. All state
//! lives in the wrapped [`RentalService`] and is discarded on exit.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use rental_app::app::RentalService;
use rental_types::{Error, OutputFormat, Result};

use crate::output;

pub struct Shell<R, W> {
    service: RentalService,
    format: OutputFormat,
    invoice_footer: Option<String>,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(
        service: RentalService,
        format: OutputFormat,
        invoice_footer: Option<String>,
        input: R,
        out: W,
    ) -> Self {
        Self {
            service,
            format,
            invoice_footer,
            input,
            out,
        }
    }

    /// Access the wrapped service, e.g. for end-of-session reporting
    pub fn service(&self) -> &RentalService {
        &self.service
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\n=== Vehicle Rental Management ===")?;
            writeln!(self.out, "1. Vehicle management")?;
            writeln!(self.out, "2. Customer management")?;
            writeln!(self.out, "3. Book vehicle")?;
            writeln!(self.out, "4. View bookings / Invoice")?;
            writeln!(self.out, "5. Return vehicle")?;
            writeln!(self.out, "0. Exit")?;
            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.vehicle_menu()?,
                "2" => self.customer_menu()?,
                "3" => self.book_vehicle()?,
                "4" => self.view_bookings()?,
                "5" => self.return_vehicle()?,
                "0" => {
                    writeln!(self.out, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line. `None` means EOF.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: Error) -> Result<()> {
        writeln!(self.out, "{}", err)?;
        Ok(())
    }

    fn vehicle_menu(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\n--- Vehicle Management ---")?;
            writeln!(self.out, "1. Add vehicle")?;
            writeln!(self.out, "2. Remove vehicle")?;
            writeln!(self.out, "3. List vehicles")?;
            writeln!(self.out, "0. Back")?;
            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.add_vehicle()?,
                "2" => self.remove_vehicle()?,
                "3" => self.list_vehicles()?,
                "0" => return Ok(()),
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }
    }

    fn add_vehicle(&mut self) -> Result<()> {
        let Some(kind) = self.prompt("Enter vehicle type (Car/Bike/...): ")? else {
            return Ok(());
        };
        let Some(model) = self.prompt("Enter model/name: ")? else {
            return Ok(());
        };
        let rate = loop {
            let Some(raw) = self.prompt("Enter rate per day (numeric): ")? else {
                return Ok(());
            };
            match raw.parse::<f64>() {
                Ok(rate) if rate.is_finite() && rate >= 0.0 => break rate,
                _ => writeln!(self.out, "Invalid rate. Try again.")?,
            }
        };
        match self
            .service
            .add_vehicle(&kind, &model, rate)
            .map(|v| (v.id, v.kind.clone(), v.model.clone(), v.rate_per_day))
        {
            Ok((id, kind, model, rate)) => writeln!(
                self.out,
                "Added: ID:{} | {} - {} | rate/day: {:.2} | available: Yes",
                id, kind, model, rate
            )?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn remove_vehicle(&mut self) -> Result<()> {
        self.list_vehicles()?;
        let Some(raw) = self.prompt("Enter vehicle ID to remove: ")? else {
            return Ok(());
        };
        let Ok(id) = raw.parse() else {
            writeln!(self.out, "Invalid ID.")?;
            return Ok(());
        };
        match self.service.remove_vehicle(id) {
            Ok(_) => writeln!(self.out, "Removed vehicle ID {}", id)?,
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn list_vehicles(&mut self) -> Result<()> {
        let vehicles: Vec<_> = self.service.vehicles().collect();
        output::write_vehicles(&mut self.out, self.format, &vehicles)
    }

    fn customer_menu(&mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\n--- Customer Management ---")?;
            writeln!(self.out, "1. Register customer")?;
            writeln!(self.out, "2. List customers")?;
            writeln!(self.out, "0. Back")?;
            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.register_customer()?,
                "2" => self.list_customers()?,
                "0" => return Ok(()),
                _ => writeln!(self.out, "Invalid choice.")?,
            }
        }
    }

    fn register_customer(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(());
        };
        let Some(phone) = self.prompt("Enter phone: ")? else {
            return Ok(());
        };
        let id = self.service.add_customer(&name, &phone).id;
        writeln!(self.out, "Registered: ID:{} | {} | {}", id, name, phone)?;
        Ok(())
    }

    fn list_customers(&mut self) -> Result<()> {
        let customers: Vec<_> = self.service.customers().collect();
        output::write_customers(&mut self.out, self.format, &customers)
    }

    fn book_vehicle(&mut self) -> Result<()> {
        if self.service.vehicle_count() == 0 {
            writeln!(self.out, "No vehicles available. Add vehicles first.")?;
            return Ok(());
        }
        if self.service.customer_count() == 0 {
            writeln!(self.out, "No customers registered. Register a customer first.")?;
            return Ok(());
        }

        self.list_vehicles()?;
        let Some(raw) = self.prompt("Enter vehicle ID to book: ")? else {
            return Ok(());
        };
        let Ok(vehicle_id) = raw.parse() else {
            writeln!(self.out, "Invalid ID.")?;
            return Ok(());
        };
        match self.service.vehicle(vehicle_id).map(|v| v.available) {
            Err(e) => {
                self.report(e)?;
                return Ok(());
            }
            Ok(false) => {
                writeln!(self.out, "Vehicle not available currently.")?;
                return Ok(());
            }
            Ok(true) => {}
        }

        self.list_customers()?;
        let Some(raw) = self.prompt("Enter customer ID: ")? else {
            return Ok(());
        };
        let Ok(customer_id) = raw.parse() else {
            writeln!(self.out, "Invalid ID.")?;
            return Ok(());
        };
        if let Some(e) = self.service.customer(customer_id).err() {
            self.report(e)?;
            return Ok(());
        }

        let Some(start) = self.prompt_date("Enter start date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(end) = self.prompt_date("Enter end date (YYYY-MM-DD): ")? else {
            return Ok(());
        };

        match self
            .service
            .book(vehicle_id, customer_id, start, end)
            .map(|b| b.id)
        {
            Ok(booking_id) => {
                writeln!(self.out, "Booking successful. Booking ID: {}", booking_id)?;
                self.print_invoice(booking_id)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn view_bookings(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Bookings ---")?;
        if self.service.booking_count() == 0 {
            writeln!(self.out, "No bookings yet.")?;
            return Ok(());
        }
        let bookings: Vec<_> = self.service.bookings().collect();
        output::write_bookings(&mut self.out, self.format, &bookings)?;

        let Some(raw) =
            self.prompt("Enter booking ID to view invoice (or press Enter to go back): ")?
        else {
            return Ok(());
        };
        if raw.is_empty() {
            return Ok(());
        }
        let Ok(booking_id) = raw.parse::<u32>() else {
            writeln!(self.out, "Invalid booking ID.")?;
            return Ok(());
        };
        self.print_invoice(booking_id)
    }

    fn return_vehicle(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Return Vehicle ---")?;
        let Some(raw) = self.prompt("Enter booking ID: ")? else {
            return Ok(());
        };
        let Ok(booking_id) = raw.parse() else {
            writeln!(self.out, "Invalid ID.")?;
            return Ok(());
        };

        let Some(raw) = self.prompt(
            "Enter actual return date (YYYY-MM-DD) or press Enter to use planned end date: ",
        )?
        else {
            return Ok(());
        };
        let actual = if raw.is_empty() {
            None
        } else {
            match raw.parse::<NaiveDate>() {
                Ok(date) => Some(date),
                Err(_) => {
                    writeln!(self.out, "Invalid date format. Canceling return.")?;
                    return Ok(());
                }
            }
        };

        match self.service.return_vehicle(booking_id, actual).map(|b| b.id) {
            Ok(booking_id) => {
                writeln!(self.out, "Vehicle returned. Updated booking:")?;
                self.print_invoice(booking_id)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(())
    }

    fn prompt_date(&mut self, text: &str) -> Result<Option<NaiveDate>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match raw.parse::<NaiveDate>() {
            Ok(date) => Ok(Some(date)),
            Err(_) => {
                writeln!(self.out, "Invalid date format. Use YYYY-MM-DD.")?;
                Ok(None)
            }
        }
    }

    fn print_invoice(&mut self, booking_id: u32) -> Result<()> {
        match self.service.invoice(booking_id) {
            Ok(invoice) => output::write_invoice(
                &mut self.out,
                self.format,
                &invoice,
                self.invoice_footer.as_deref(),
            ),
            Err(e) => self.report(e),
        }
    }
}
