//! Command execution
//!
//! Runs a parsed [`Command`] against a rental system and prints the outcome.
//! Operation failures are returned to the caller, which decides how to report
//! them; the listing commands delegate to the report module.

use super::args::Command;
use crate::core::{RentalStore, RentalSystem};
use crate::io::report::{
    write_customer_table, write_history_table, write_summary, write_vehicle_table,
};
use crate::types::{Customer, Plate, RentalError, RentalRecord, Vehicle};
use chrono::{Local, NaiveDate};
use std::io::Write;

/// Execute a command against the given rental system
///
/// # Errors
///
/// Returns the validation or state error of the underlying operation, or an
/// I/O error if the output cannot be written.
pub fn execute<S: RentalStore>(
    command: Command,
    system: &mut RentalSystem<S>,
    output: &mut dyn Write,
) -> Result<(), RentalError> {
    match command {
        Command::AddVehicle {
            category,
            plate,
            make,
            model,
            year,
        } => {
            let mut vehicle = Vehicle::new(category.into(), make, model, year);
            vehicle.set_license_plate(plate.as_deref())?;
            system.add_vehicle(vehicle)?;
            writeln!(output, "Vehicle added")?;
        }
        Command::AddCustomer { id, name } => {
            system.add_customer(Customer::new(id, name))?;
            writeln!(output, "Customer {} added", id)?;
        }
        Command::Rent {
            plate,
            customer_id,
            amount,
            date,
        } => {
            let record = system.rent_vehicle(&plate, customer_id, date_or_today(date), amount)?;
            writeln!(
                output,
                "Vehicle {} rented to {}",
                record.plate(),
                customer_name(&*system, &record)
            )?;
        }
        Command::Return {
            plate,
            customer_id,
            fees,
            date,
        } => {
            let record = system.return_vehicle(&plate, customer_id, date_or_today(date), fees)?;
            writeln!(
                output,
                "Vehicle {} returned by {}",
                record.plate(),
                customer_name(&*system, &record)
            )?;
        }
        Command::Available => write_vehicle_table(system.available_vehicles(), output)?,
        Command::Vehicles => write_vehicle_table(system.vehicles(), output)?,
        Command::Customers { name: None } => write_customer_table(system.customers(), output)?,
        Command::Customers { name: Some(name) } => {
            write_customer_table(system.find_customer_by_name(&name), output)?
        }
        Command::History { plate, customer_id } => {
            let plate = plate
                .map(|raw| registered_plate(&*system, &raw))
                .transpose()?;
            if let Some(id) = customer_id {
                if system.find_customer_by_id(id).is_none() {
                    return Err(RentalError::customer_not_found(id));
                }
            }

            let history = system.history();
            let records: Vec<&RentalRecord> = match (&plate, customer_id) {
                (Some(plate), customer_id) => history
                    .for_vehicle(plate)
                    .filter(|record| customer_id.map_or(true, |id| record.customer_id() == id))
                    .collect(),
                (None, Some(id)) => history.for_customer(id).collect(),
                (None, None) => history.records().iter().collect(),
            };
            write_history_table(records, system.customers(), output)?
        }
        Command::Report => write_summary(&*system, output)?,
    }

    Ok(())
}

fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn registered_plate<S: RentalStore>(
    system: &RentalSystem<S>,
    raw: &str,
) -> Result<Plate, RentalError> {
    system
        .find_vehicle_by_plate(raw)
        .and_then(|vehicle| vehicle.license_plate())
        .cloned()
        .ok_or_else(|| RentalError::vehicle_not_found(raw.trim()))
}

fn customer_name<S: RentalStore>(system: &RentalSystem<S>, record: &RentalRecord) -> String {
    system
        .find_customer_by_id(record.customer_id())
        .map(|customer| customer.name().to_string())
        .unwrap_or_else(|| format!("customer {}", record.customer_id()))
}
