//! Error types for the vehicle rental tracker
//!
//! This module defines all error types that can occur while managing vehicles,
//! customers and rentals. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Malformed license plates, line breaks in free text
//! - **Lookup Errors**: Unknown vehicles or customers
//! - **State Errors**: Renting a rented vehicle, returning an available one
//! - **Storage Errors**: I/O failures and unreadable lines in the data files

use super::customer::CustomerId;
use thiserror::Error;

/// Main error type for the rental tracker
///
/// Each variant includes the identifying value (plate or customer id) that
/// caused the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RentalError {
    /// License plate does not match the AAA100 format
    ///
    /// Reported immediately to the caller; the vehicle keeps its previous plate.
    #[error("Invalid license plate '{plate}': expected 3 letters followed by 3 digits")]
    InvalidPlate {
        /// The rejected input
        plate: String,
    },

    /// No vehicle with the given plate is registered
    #[error("Vehicle {plate} not found")]
    VehicleNotFound {
        /// The plate that was looked up
        plate: String,
    },

    /// No customer with the given id is registered
    #[error("Customer {id} not found")]
    CustomerNotFound {
        /// The customer id that was looked up
        id: CustomerId,
    },

    /// Vehicle cannot be rented because it is already out
    ///
    /// The vehicle state is left unchanged.
    #[error("Vehicle {plate} is not available for renting")]
    VehicleNotAvailable {
        /// Plate of the rented vehicle
        plate: String,
    },

    /// Vehicle cannot be returned because it is not rented
    ///
    /// The vehicle state is left unchanged.
    #[error("Vehicle {plate} is not rented")]
    VehicleNotRented {
        /// Plate of the available vehicle
        plate: String,
    },

    /// A vehicle with this plate is already registered
    #[error("Vehicle {plate} is already registered")]
    DuplicateVehicle {
        /// The duplicated plate
        plate: String,
    },

    /// A customer with this id is already registered
    #[error("Customer {id} is already registered")]
    DuplicateCustomer {
        /// The duplicated customer id
        id: CustomerId,
    },

    /// A free-text field contains a line break
    ///
    /// Each entity is stored on a single line, so the value is rejected before
    /// anything is written.
    #[error("{field} must not contain line breaks")]
    LineBreakInField {
        /// Name of the offending field
        field: String,
    },

    /// I/O error occurred while reading or writing a data file
    ///
    /// During persistence this is logged and swallowed by the rental system.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A data file line could not be parsed
    ///
    /// Malformed lines are skipped on load.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for RentalError {
    fn from(error: std::io::Error) -> Self {
        RentalError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for RentalError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return RentalError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        RentalError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl RentalError {
    /// Create an InvalidPlate error
    pub fn invalid_plate(plate: &str) -> Self {
        RentalError::InvalidPlate {
            plate: plate.to_string(),
        }
    }

    /// Create a VehicleNotFound error
    pub fn vehicle_not_found(plate: &str) -> Self {
        RentalError::VehicleNotFound {
            plate: plate.to_string(),
        }
    }

    /// Create a CustomerNotFound error
    pub fn customer_not_found(id: CustomerId) -> Self {
        RentalError::CustomerNotFound { id }
    }

    /// Create a VehicleNotAvailable error
    pub fn vehicle_not_available(plate: &str) -> Self {
        RentalError::VehicleNotAvailable {
            plate: plate.to_string(),
        }
    }

    /// Create a VehicleNotRented error
    pub fn vehicle_not_rented(plate: &str) -> Self {
        RentalError::VehicleNotRented {
            plate: plate.to_string(),
        }
    }

    /// Create a DuplicateVehicle error
    pub fn duplicate_vehicle(plate: &str) -> Self {
        RentalError::DuplicateVehicle {
            plate: plate.to_string(),
        }
    }

    /// Create a DuplicateCustomer error
    pub fn duplicate_customer(id: CustomerId) -> Self {
        RentalError::DuplicateCustomer { id }
    }

    /// Create a LineBreakInField error
    pub fn line_break_in_field(field: &str) -> Self {
        RentalError::LineBreakInField {
            field: field.to_string(),
        }
    }

    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        RentalError::ParseError {
            line,
            message: message.into(),
        }
    }
}
