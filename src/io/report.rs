//! Console tables for vehicles, customers and rental history
//!
//! Every writer takes a `&mut dyn Write` so the same code prints to stdout in
//! the CLI and to a buffer in tests. Columns are left-aligned and padded; the
//! last column is never padded, so lines carry no trailing spaces.

use crate::core::{RentalStore, RentalSystem};
use crate::io::line_format::format_amount;
use crate::types::{Customer, RentalError, RentalRecord, Vehicle};
use std::io::Write;

fn write_vehicle_row(
    output: &mut dyn Write,
    cells: [&str; 6],
) -> Result<(), RentalError> {
    let [category, plate, make, model, year, status] = cells;
    writeln!(
        output,
        "{:<12}{:<8}{:<12}{:<12}{:<6}{}",
        category, plate, make, model, year, status
    )?;
    Ok(())
}

/// Write a vehicle table
///
/// Unplated vehicles show `-` in the plate column.
pub fn write_vehicle_table<'a, I>(vehicles: I, output: &mut dyn Write) -> Result<(), RentalError>
where
    I: IntoIterator<Item = &'a Vehicle>,
{
    write_vehicle_row(output, ["Type", "Plate", "Make", "Model", "Year", "Status"])?;

    for vehicle in vehicles {
        let plate = vehicle
            .license_plate()
            .map(|plate| plate.as_str())
            .unwrap_or("-");
        let year = vehicle.year().to_string();
        write_vehicle_row(
            output,
            [
                vehicle.category().label(),
                plate,
                vehicle.make(),
                vehicle.model(),
                &year,
                vehicle.status().label(),
            ],
        )?;
    }

    Ok(())
}

/// Write a customer table
pub fn write_customer_table<'a, I>(customers: I, output: &mut dyn Write) -> Result<(), RentalError>
where
    I: IntoIterator<Item = &'a Customer>,
{
    writeln!(output, "{:<6}{}", "Id", "Name")?;
    for customer in customers {
        writeln!(output, "{:<6}{}", customer.id(), customer.name())?;
    }
    Ok(())
}

/// Write the rental history in chronological order
///
/// Customer ids are resolved to names through `customers`; an id with no
/// matching customer is shown as `#id`.
pub fn write_history_table<'a, I>(
    records: I,
    customers: &[Customer],
    output: &mut dyn Write,
) -> Result<(), RentalError>
where
    I: IntoIterator<Item = &'a RentalRecord>,
{
    writeln!(
        output,
        "{:<12}{:<8}{:<8}{:<20}{}",
        "Date", "Kind", "Plate", "Customer", "Amount"
    )?;

    for record in records {
        let customer = customers
            .iter()
            .find(|customer| customer.id() == record.customer_id())
            .map(|customer| customer.name().to_string())
            .unwrap_or_else(|| format!("#{}", record.customer_id()));

        writeln!(
            output,
            "{:<12}{:<8}{:<8}{:<20}{}",
            record.date().to_string(),
            record.kind().label(),
            record.plate().as_str(),
            customer,
            format_amount(record.amount())
        )?;
    }

    Ok(())
}

/// Write all three tables, each under a heading and separated by a blank line
pub fn write_summary<S: RentalStore>(
    system: &RentalSystem<S>,
    output: &mut dyn Write,
) -> Result<(), RentalError> {
    writeln!(output, "Vehicles")?;
    write_vehicle_table(system.vehicles(), output)?;

    writeln!(output)?;
    writeln!(output, "Customers")?;
    write_customer_table(system.customers(), output)?;

    writeln!(output)?;
    writeln!(output, "Rental history")?;
    write_history_table(system.history().records(), system.customers(), output)?;

    Ok(())
}
