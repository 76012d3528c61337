//! Flat-file store
//!
//! Mirrors each entity list to its own line-delimited text file inside a data
//! directory. Delegates the line layout to the line_format module.
//!
//! # Design
//!
//! Loading reads a file line by line with a csv::Reader configured for the
//! flat layout (no header, no quoting, flexible field counts). Every line is
//! deserialized positionally and converted to a domain type. Lines with the
//! wrong number of fields or unparseable values are skipped.
//!
//! Appending opens the file in append mode, creating the data directory and
//! the file if needed, and writes a single line.
//!
//! # Error Handling
//!
//! - A missing file loads as an empty list
//! - Failing to open or read a file is returned as `RentalError::IoError`
//! - Malformed lines are logged at debug level and skipped

use crate::core::RentalStore;
use crate::io::line_format::{
    convert_customer_line, convert_record_line, convert_vehicle_line, customer_fields,
    record_fields, vehicle_fields, write_line, CustomerLine, RecordLine, VehicleLine,
    CUSTOMER_FIELDS, RECORD_FIELDS, VEHICLE_FIELDS,
};
use crate::types::{Customer, RentalError, RentalRecord, Vehicle};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

/// File holding one line per registered vehicle
pub const VEHICLES_FILE: &str = "vehicles.txt";
/// File holding one line per registered customer
pub const CUSTOMERS_FILE: &str = "customers.txt";
/// File holding one line per rent or return event
pub const RECORDS_FILE: &str = "rental_records.txt";

/// Location of the data files
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Directory containing the three data files
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
        }
    }

    pub fn vehicles_path(&self) -> PathBuf {
        self.data_dir.join(VEHICLES_FILE)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(CUSTOMERS_FILE)
    }

    pub fn records_path(&self) -> PathBuf {
        self.data_dir.join(RECORDS_FILE)
    }
}

impl Default for StoreConfig {
    /// Data files in the working directory
    fn default() -> Self {
        StoreConfig::new(".")
    }
}

/// Store backed by the three flat files of a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    config: StoreConfig,
}

impl FileStore {
    pub fn new(config: StoreConfig) -> Self {
        FileStore { config }
    }

    fn load<L, T, F>(path: &Path, width: usize, convert: F) -> Result<Vec<T>, RentalError>
    where
        L: DeserializeOwned,
        F: Fn(L) -> Result<T, String>,
    {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(RentalError::IoError {
                    message: format!("Failed to open file '{}': {}", path.display(), e),
                })
            }
        };

        let mut entries = Vec::new();
        for result in read_entries(file, width, convert) {
            match result {
                Ok(entry) => entries.push(entry),
                Err(e @ RentalError::IoError { .. }) => return Err(e),
                Err(e) => log::debug!("Skipping line in {}: {}", path.display(), e),
            }
        }

        Ok(entries)
    }

    fn append(&self, path: &Path, fields: &[String]) -> Result<(), RentalError> {
        fs::create_dir_all(&self.config.data_dir)?;

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        write_line(fields, &mut file)
    }
}

impl RentalStore for FileStore {
    fn load_vehicles(&self) -> Result<Vec<Vehicle>, RentalError> {
        Self::load::<VehicleLine, _, _>(
            &self.config.vehicles_path(),
            VEHICLE_FIELDS,
            convert_vehicle_line,
        )
    }

    fn load_customers(&self) -> Result<Vec<Customer>, RentalError> {
        Self::load::<CustomerLine, _, _>(
            &self.config.customers_path(),
            CUSTOMER_FIELDS,
            convert_customer_line,
        )
    }

    fn load_records(&self) -> Result<Vec<RentalRecord>, RentalError> {
        Self::load::<RecordLine, _, _>(
            &self.config.records_path(),
            RECORD_FIELDS,
            convert_record_line,
        )
    }

    fn append_vehicle(&mut self, vehicle: &Vehicle) -> Result<(), RentalError> {
        self.append(&self.config.vehicles_path(), &vehicle_fields(vehicle))
    }

    fn append_customer(&mut self, customer: &Customer) -> Result<(), RentalError> {
        self.append(&self.config.customers_path(), &customer_fields(customer))
    }

    fn append_record(&mut self, record: &RentalRecord) -> Result<(), RentalError> {
        self.append(&self.config.records_path(), &record_fields(record))
    }
}

/// Parse every line of a flat file
///
/// Each line must have exactly `width` comma-separated fields. Fields are
/// trimmed, quotes are taken literally and blank lines are ignored.
///
/// # Returns
///
/// One entry per non-blank line:
/// * `Ok(T)` - Successfully converted line
/// * `Err(RentalError::ParseError)` - Wrong field count or conversion failure, with line number
/// * `Err(RentalError::IoError)` - The underlying reader failed
pub fn read_entries<R, L, T, F>(source: R, width: usize, convert: F) -> Vec<Result<T, RentalError>>
where
    R: Read,
    L: DeserializeOwned,
    F: Fn(L) -> Result<T, String>,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(source);

    reader
        .records()
        .map(|result| {
            let record = result?;
            let line = record.position().map(|pos| pos.line());

            if record.len() != width {
                return Err(RentalError::parse_error(
                    line,
                    format!("expected {} fields, found {}", width, record.len()),
                ));
            }

            let parsed: L = record.deserialize(None)?;
            convert(parsed).map_err(|message| RentalError::parse_error(line, message))
        })
        .collect()
}
