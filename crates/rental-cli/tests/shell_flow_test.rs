//! Scripted end-to-end shell sessions
//!
//! Each test feeds a fixed sequence of menu choices and prompt answers
//! into the shell and asserts on the rendered output.

use std::io::Cursor;

use rental_app::app::RentalService;
use rental_cli::shell::Shell;
use rental_types::OutputFormat;

fn run_script(format: OutputFormat, script: &str) -> String {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut shell = Shell::new(RentalService::new(), format, None, input, &mut out);
    shell.run().expect("shell session failed");
    String::from_utf8(out).expect("shell output not utf-8")
}

fn run_table(script: &str) -> String {
    run_script(OutputFormat::Table, script)
}

#[test]
fn test_full_rental_cycle() {
    // Add a vehicle, register a customer, book, double-book, return
    // late, remove the vehicle.
    let script = "\
1
1
Car
Sedan
50
0
2
1
Alice
555-1111
0
3
1
1
2024-01-01
2024-01-03
3
1
5
1
2024-01-05
1
2
1
0
0
";
    let output = run_table(script);

    assert!(output.contains("Added: ID:1 | Car - Sedan | rate/day: 50.00"));
    assert!(output.contains("Registered: ID:1 | Alice | 555-1111"));
    assert!(output.contains("Booking successful. Booking ID: 1"));
    assert!(output.contains("Days: 3"));
    assert!(output.contains("Total: 150.00"));
    // Second booking attempt while the vehicle is out
    assert!(output.contains("Vehicle not available currently."));
    // Late return recomputes the cost
    assert!(output.contains("Vehicle returned. Updated booking:"));
    assert!(output.contains("Days: 5"));
    assert!(output.contains("Total: 250.00"));
    assert!(output.contains("Returned: Yes"));
    // Removal succeeds once no active booking remains
    assert!(output.contains("Removed vehicle ID 1"));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_remove_blocked_while_booked() {
    let script = "\
1
1
Van
Transit
80
0
2
1
Bob
555-2222
0
3
1
1
2024-03-10
2024-03-12
1
2
1
0
0
";
    let output = run_table(script);
    assert!(output.contains("Cannot remove vehicle 1: it has an active booking"));
    assert!(!output.contains("Removed vehicle ID 1"));
}

#[test]
fn test_invalid_rate_reprompts() {
    let script = "\
1
1
Car
Sedan
abc
-5
50
0
0
";
    let output = run_table(script);
    let reprompts = output.matches("Invalid rate. Try again.").count();
    assert_eq!(reprompts, 2);
    assert!(output.contains("Added: ID:1 | Car - Sedan | rate/day: 50.00"));
}

#[test]
fn test_booking_requires_seeded_registries() {
    let output = run_table("3\n0\n");
    assert!(output.contains("No vehicles available. Add vehicles first."));
}

#[test]
fn test_return_before_start_is_rejected() {
    let script = "\
1
1
Car
Sedan
50
0
2
1
Alice
555-1111
0
3
1
1
2024-01-02
2024-01-04
5
1
2024-01-01
0
";
    let output = run_table(script);
    assert!(output.contains("End date 2024-01-01 cannot be before start date 2024-01-02"));
    assert!(!output.contains("Vehicle returned."));
}

#[test]
fn test_double_return_is_rejected() {
    let script = "\
1
1
Car
Sedan
50
0
2
1
Alice
555-1111
0
3
1
1
2024-01-01
2024-01-03
5
1

5
1

0
";
    let output = run_table(script);
    assert!(output.contains("Booking 1 was already returned"));
}

#[test]
fn test_bookings_listing_marks_returned() {
    let script = "\
1
1
Car
Sedan
50
0
2
1
Alice
555-1111
0
3
1
1
2024-01-01
2024-01-03
5
1

4

0
";
    let output = run_table(script);
    assert!(output.contains("(Returned)"));
    assert!(output.contains("--- Bookings ---"));
}

#[test]
fn test_invalid_menu_choice() {
    let output = run_table("9\n0\n");
    assert!(output.contains("Invalid choice."));
}

#[test]
fn test_eof_exits_cleanly() {
    // No explicit exit choice; the script just runs dry.
    let output = run_table("1\n3\n0\n");
    assert!(output.contains("(no vehicles)"));
}

#[test]
fn test_json_vehicle_listing() {
    let script = "\
1
1
Car
Sedan
50
3
0
0
";
    let output = run_script(OutputFormat::Json, script);
    assert!(output.contains("\"rate_per_day\": 50.0"));
    assert!(output.contains("\"available\": true"));
}

#[test]
fn test_invoice_footer_rendered() {
    let script = "\
1
1
Car
Sedan
50
0
2
1
Alice
555-1111
0
3
1
1
2024-01-01
2024-01-03
0
";
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut shell = Shell::new(
        RentalService::new(),
        OutputFormat::Table,
        Some("Thank you for renting with us".to_string()),
        input,
        &mut out,
    );
    shell.run().expect("shell session failed");
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Total: 150.00"));
    assert!(output.contains("Thank you for renting with us"));
}
