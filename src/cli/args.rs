use crate::io::StoreConfig;
use crate::types::{CustomerId, VehicleCategory};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Track vehicle rentals in flat text files
#[derive(Parser, Debug)]
#[command(name = "vehicle-rental")]
#[command(about = "Track vehicle rentals in flat text files", long_about = None)]
pub struct CliArgs {
    /// Directory holding vehicles.txt, customers.txt and rental_records.txt
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        global = true,
        help = "Directory containing the data files (default: working directory)"
    )]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Rental operations and listings
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a vehicle
    AddVehicle {
        #[arg(long, value_enum)]
        category: CategoryArg,
        /// License plate (AAA100 format); omit for an unplated vehicle
        #[arg(long)]
        plate: Option<String>,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
        #[arg(long)]
        year: i32,
    },

    /// Register a customer
    AddCustomer {
        #[arg(long)]
        id: CustomerId,
        #[arg(long)]
        name: String,
    },

    /// Rent an available vehicle to a customer
    Rent {
        #[arg(long)]
        plate: String,
        #[arg(long = "customer", value_name = "ID")]
        customer_id: CustomerId,
        #[arg(long)]
        amount: Decimal,
        /// Rental date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Return a rented vehicle
    Return {
        #[arg(long)]
        plate: String,
        #[arg(long = "customer", value_name = "ID")]
        customer_id: CustomerId,
        /// Extra fees charged on return
        #[arg(long, default_value = "0")]
        fees: Decimal,
        /// Return date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List vehicles that can be rented
    Available,

    /// List all vehicles
    Vehicles,

    /// List all customers
    Customers {
        /// Only show the customer with this name (case-insensitive)
        #[arg(long)]
        name: Option<String>,
    },

    /// Show the rental history
    History {
        /// Only show records for this vehicle
        #[arg(long)]
        plate: Option<String>,
        /// Only show records for this customer
        #[arg(long = "customer", value_name = "ID")]
        customer_id: Option<CustomerId>,
    },

    /// Show vehicles, customers and rental history
    Report,
}

/// Vehicle categories accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum CategoryArg {
    Car,
    Motorcycle,
}

impl From<CategoryArg> for VehicleCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Car => VehicleCategory::Car,
            CategoryArg::Motorcycle => VehicleCategory::Motorcycle,
        }
    }
}

impl CliArgs {
    /// Create a StoreConfig from CLI arguments
    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_dir(&["program", "vehicles"], ".")]
    #[case::explicit_dir(&["program", "--data-dir", "/srv/rental", "vehicles"], "/srv/rental")]
    #[case::dir_after_subcommand(&["program", "history", "--data-dir", "data"], "data")]
    fn test_data_dir_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.data_dir, PathBuf::from(expected));
        assert_eq!(parsed.to_store_config().data_dir, PathBuf::from(expected));
    }

    #[rstest]
    #[case::available(&["program", "available"], Command::Available)]
    #[case::vehicles(&["program", "vehicles"], Command::Vehicles)]
    #[case::customers(&["program", "customers"], Command::Customers { name: None })]
    #[case::customers_by_name(
        &["program", "customers", "--name", "jane roe"],
        Command::Customers { name: Some("jane roe".to_string()) }
    )]
    #[case::history(&["program", "history"], Command::History { plate: None, customer_id: None })]
    #[case::history_filtered(
        &["program", "history", "--plate", "ABC123", "--customer", "2"],
        Command::History { plate: Some("ABC123".to_string()), customer_id: Some(2) }
    )]
    #[case::report(&["program", "report"], Command::Report)]
    #[case::add_customer(
        &["program", "add-customer", "--id", "7", "--name", "John Doe"],
        Command::AddCustomer { id: 7, name: "John Doe".to_string() }
    )]
    #[case::add_vehicle(
        &["program", "add-vehicle", "--category", "motorcycle", "--plate", "mot001",
          "--make", "Honda", "--model", "CB500", "--year", "2020"],
        Command::AddVehicle {
            category: CategoryArg::Motorcycle,
            plate: Some("mot001".to_string()),
            make: "Honda".to_string(),
            model: "CB500".to_string(),
            year: 2020,
        }
    )]
    #[case::rent(
        &["program", "rent", "--plate", "ABC123", "--customer", "1", "--amount", "49.90",
          "--date", "2024-05-01"],
        Command::Rent {
            plate: "ABC123".to_string(),
            customer_id: 1,
            amount: Decimal::new(4990, 2),
            date: NaiveDate::from_ymd_opt(2024, 5, 1),
        }
    )]
    #[case::return_default_fees(
        &["program", "return", "--plate", "ABC123", "--customer", "1"],
        Command::Return {
            plate: "ABC123".to_string(),
            customer_id: 1,
            fees: Decimal::ZERO,
            date: None,
        }
    )]
    fn test_command_parsing(#[case] args: &[&str], #[case] expected: Command) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command, expected);
    }

    #[rstest]
    #[case::missing_command(&["program"])]
    #[case::unknown_category(&["program", "add-vehicle", "--category", "truck", "--make", "A", "--model", "B", "--year", "1"])]
    #[case::bad_amount(&["program", "rent", "--plate", "ABC123", "--customer", "1", "--amount", "lots"])]
    #[case::bad_date(&["program", "rent", "--plate", "ABC123", "--customer", "1", "--amount", "5", "--date", "yesterday"])]
    #[case::negative_customer(&["program", "add-customer", "--id", "-1", "--name", "X"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
