//! Line format for the rental data files
//!
//! This module centralizes the flat-file layout, providing:
//! - Line structures for positional deserialization
//! - Conversion from lines to domain types
//! - Field rendering for appends
//!
//! Layouts (comma-separated, no header, no escaping):
//!
//! | File                 | Fields                             |
//! |----------------------|------------------------------------|
//! | `vehicles.txt`       | type,plate,make,model,year,status  |
//! | `customers.txt`      | id,name                            |
//! | `rental_records.txt` | plate,customerId,date,amount,kind  |
//!
//! All functions are pure (no file access) for easy testing.

use crate::types::{
    Customer, CustomerId, Plate, RentalError, RentalKind, RentalRecord, Vehicle, VehicleCategory,
    VehicleStatus,
};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Number of fields on a `vehicles.txt` line
pub const VEHICLE_FIELDS: usize = 6;
/// Number of fields on a `customers.txt` line
pub const CUSTOMER_FIELDS: usize = 2;
/// Number of fields on a `rental_records.txt` line
pub const RECORD_FIELDS: usize = 5;

/// Date layout used in `rental_records.txt`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One `vehicles.txt` line
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VehicleLine {
    pub category: String,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub status: String,
}

/// One `customers.txt` line
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CustomerLine {
    pub id: String,
    pub name: String,
}

/// One `rental_records.txt` line
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RecordLine {
    pub plate: String,
    pub customer_id: String,
    pub date: String,
    pub amount: String,
    pub kind: String,
}

/// Convert a VehicleLine to a Vehicle
///
/// An empty plate field yields an unplated vehicle.
///
/// # Returns
///
/// * `Ok(Vehicle)` - Successfully converted line
/// * `Err(String)` - Error message describing the conversion failure
pub fn convert_vehicle_line(line: VehicleLine) -> Result<Vehicle, String> {
    let category = VehicleCategory::from_str(&line.category).map_err(|e| e.to_string())?;

    let year = line
        .year
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("Invalid year '{}'", line.year))?;

    let status = VehicleStatus::from_str(&line.status).map_err(|e| e.to_string())?;

    let mut vehicle = Vehicle::new(category, line.make, line.model, year);
    vehicle
        .set_license_plate(Some(&line.plate))
        .map_err(|e| e.to_string())?;
    vehicle.set_status(status);

    Ok(vehicle)
}

/// Convert a CustomerLine to a Customer
pub fn convert_customer_line(line: CustomerLine) -> Result<Customer, String> {
    let id = line
        .id
        .trim()
        .parse::<CustomerId>()
        .map_err(|_| format!("Invalid customer id '{}'", line.id))?;

    Ok(Customer::new(id, line.name))
}

/// Convert a RecordLine to a RentalRecord
///
/// The plate must be present and valid; a record without a plate cannot be
/// tied back to a vehicle.
pub fn convert_record_line(line: RecordLine) -> Result<RentalRecord, String> {
    let plate = Plate::parse(line.plate.trim()).map_err(|e| e.to_string())?;

    let customer_id = line
        .customer_id
        .trim()
        .parse::<CustomerId>()
        .map_err(|_| format!("Invalid customer id '{}'", line.customer_id))?;

    let date = NaiveDate::parse_from_str(line.date.trim(), DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{}'", line.date))?;

    let amount = Decimal::from_str(line.amount.trim())
        .map_err(|_| format!("Invalid amount '{}'", line.amount))?;

    let kind = RentalKind::from_str(&line.kind).map_err(|e| e.to_string())?;

    Ok(RentalRecord::new(plate, customer_id, date, amount, kind))
}

/// Fields of a vehicle line, in file order
pub fn vehicle_fields(vehicle: &Vehicle) -> Vec<String> {
    vec![
        vehicle.category().label().to_string(),
        vehicle
            .license_plate()
            .map(|plate| plate.to_string())
            .unwrap_or_default(),
        vehicle.make().to_string(),
        vehicle.model().to_string(),
        vehicle.year().to_string(),
        vehicle.status().label().to_string(),
    ]
}

/// Fields of a customer line, in file order
pub fn customer_fields(customer: &Customer) -> Vec<String> {
    vec![customer.id().to_string(), customer.name().to_string()]
}

/// Fields of a rental record line, in file order
///
/// Amounts are written through [`format_amount`].
pub fn record_fields(record: &RentalRecord) -> Vec<String> {
    vec![
        record.plate().to_string(),
        record.customer_id().to_string(),
        record.date().format(DATE_FORMAT).to_string(),
        format_amount(record.amount()),
        record.kind().label().to_string(),
    ]
}

/// Render an amount with two decimal places, rounding half away from zero
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Write one line of fields
///
/// Fields are joined with commas and never quoted, so an embedded comma is
/// written as-is.
pub fn write_line(fields: &[String], output: &mut dyn Write) -> Result<(), RentalError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(output);

    writer.write_record(fields)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn vehicle_line(category: &str, plate: &str, year: &str, status: &str) -> VehicleLine {
        VehicleLine {
            category: category.to_string(),
            plate: plate.to_string(),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: year.to_string(),
            status: status.to_string(),
        }
    }

    fn record_line(plate: &str, customer_id: &str, date: &str, amount: &str, kind: &str) -> RecordLine {
        RecordLine {
            plate: plate.to_string(),
            customer_id: customer_id.to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
            kind: kind.to_string(),
        }
    }

    #[rstest]
    #[case("Car", "ABC123", VehicleCategory::Car, Some("ABC123"), VehicleStatus::Available)]
    #[case("Motorcycle", "mot001", VehicleCategory::Motorcycle, Some("MOT001"), VehicleStatus::Rented)]
    #[case("Car", "", VehicleCategory::Car, None, VehicleStatus::Available)]
    fn test_convert_vehicle_line_valid(
        #[case] category: &str,
        #[case] plate: &str,
        #[case] expected_category: VehicleCategory,
        #[case] expected_plate: Option<&str>,
        #[case] expected_status: VehicleStatus,
    ) {
        let line = vehicle_line(category, plate, "2022", expected_status.label());

        let vehicle = convert_vehicle_line(line).unwrap();
        assert_eq!(vehicle.category(), expected_category);
        assert_eq!(vehicle.license_plate().map(Plate::as_str), expected_plate);
        assert_eq!(vehicle.status(), expected_status);
        assert_eq!(vehicle.year(), 2022);
        assert_eq!(vehicle.make(), "Toyota");
    }

    #[rstest]
    #[case::unknown_type(vehicle_line("Truck", "ABC123", "2022", "AVAILABLE"), "unknown vehicle type")]
    #[case::bad_plate(vehicle_line("Car", "AB1234", "2022", "AVAILABLE"), "Invalid license plate")]
    #[case::bad_year(vehicle_line("Car", "ABC123", "new", "AVAILABLE"), "Invalid year")]
    #[case::bad_status(vehicle_line("Car", "ABC123", "2022", "LOST"), "unknown vehicle status")]
    fn test_convert_vehicle_line_errors(#[case] line: VehicleLine, #[case] expected_error: &str) {
        let result = convert_vehicle_line(line);
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[rstest]
    #[case::valid("1", Ok(1))]
    #[case::padded(" 12 ", Ok(12))]
    #[case::negative("-1", Err("Invalid customer id"))]
    #[case::not_a_number("one", Err("Invalid customer id"))]
    fn test_convert_customer_line(
        #[case] id: &str,
        #[case] expected: Result<CustomerId, &str>,
    ) {
        let line = CustomerLine {
            id: id.to_string(),
            name: "John Doe".to_string(),
        };

        match (convert_customer_line(line), expected) {
            (Ok(customer), Ok(expected_id)) => {
                assert_eq!(customer.id(), expected_id);
                assert_eq!(customer.name(), "John Doe");
            }
            (Err(e), Err(expected_error)) => assert!(e.contains(expected_error)),
            (actual, expected) => panic!("Expected {:?}, got {:?}", expected, actual),
        }
    }

    #[test]
    fn test_convert_record_line_valid() {
        let record =
            convert_record_line(record_line("abc123", "1", "2024-05-01", "50.00", "RENT")).unwrap();

        assert_eq!(record.plate().as_str(), "ABC123");
        assert_eq!(record.customer_id(), 1);
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(record.amount(), Decimal::new(5000, 2));
        assert_eq!(record.kind(), RentalKind::Rent);
    }

    #[rstest]
    #[case::missing_plate(record_line("", "1", "2024-05-01", "50.00", "RENT"), "Invalid license plate")]
    #[case::bad_customer(record_line("ABC123", "x", "2024-05-01", "50.00", "RENT"), "Invalid customer id")]
    #[case::bad_date(record_line("ABC123", "1", "05/01/2024", "50.00", "RENT"), "Invalid date")]
    #[case::bad_amount(record_line("ABC123", "1", "2024-05-01", "fifty", "RENT"), "Invalid amount")]
    #[case::bad_kind(record_line("ABC123", "1", "2024-05-01", "50.00", "LEASE"), "unknown rental kind")]
    fn test_convert_record_line_errors(#[case] line: RecordLine, #[case] expected_error: &str) {
        let result = convert_record_line(line);
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[test]
    fn test_vehicle_fields() {
        let mut vehicle =
            Vehicle::with_plate(VehicleCategory::Car, "abc123", "Toyota", "Camry", 2022).unwrap();
        vehicle.set_status(VehicleStatus::Rented);

        assert_eq!(
            vehicle_fields(&vehicle),
            vec!["Car", "ABC123", "Toyota", "Camry", "2022", "RENTED"]
        );
    }

    #[test]
    fn test_unplated_vehicle_fields_have_empty_plate() {
        let vehicle = Vehicle::new(VehicleCategory::Motorcycle, "Honda", "CB500", 2020);
        assert_eq!(vehicle_fields(&vehicle)[1], "");
    }

    #[rstest]
    #[case(Decimal::new(50, 0), "50.00")]
    #[case(Decimal::new(7555, 2), "75.55")]
    #[case(Decimal::ZERO, "0.00")]
    #[case(Decimal::new(12345, 3), "12.35")]
    fn test_record_fields_amount_precision(#[case] amount: Decimal, #[case] expected: &str) {
        let record = RentalRecord::new(
            Plate::parse("ABC123").unwrap(),
            1,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            amount,
            RentalKind::Return,
        );

        let fields = record_fields(&record);
        assert_eq!(fields, vec!["ABC123", "1", "2024-05-01", expected, "RETURN"]);
    }

    #[rstest]
    #[case::plain(vec!["1", "John Doe"], "1,John Doe\n")]
    #[case::embedded_comma(vec!["2", "Doe, Jane"], "2,Doe, Jane\n")]
    #[case::embedded_quote(vec!["3", "Jo \"JJ\" Doe"], "3,Jo \"JJ\" Doe\n")]
    fn test_write_line_never_escapes(#[case] fields: Vec<&str>, #[case] expected: &str) {
        let fields: Vec<String> = fields.into_iter().map(String::from).collect();
        let mut output = Vec::new();

        write_line(&fields, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}
