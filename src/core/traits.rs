//! Storage abstraction for the rental system
//!
//! The rental system never touches disk directly. It is handed a store that
//! mirrors each entity list, so the state machine can be exercised against an
//! in-memory store in tests and against the flat files in production.

use crate::types::{Customer, RentalError, RentalRecord, Vehicle};

/// Trait for persisting vehicles, customers and rental records
///
/// Loads return every readable entry in the order it was appended. Appends
/// are single-shot; the rental system logs and ignores their failures.
pub trait RentalStore {
    /// Load all stored vehicles
    fn load_vehicles(&self) -> Result<Vec<Vehicle>, RentalError>;

    /// Load all stored customers
    fn load_customers(&self) -> Result<Vec<Customer>, RentalError>;

    /// Load all stored rental records
    fn load_records(&self) -> Result<Vec<RentalRecord>, RentalError>;

    /// Append a newly registered vehicle
    fn append_vehicle(&mut self, vehicle: &Vehicle) -> Result<(), RentalError>;

    /// Append a newly registered customer
    fn append_customer(&mut self, customer: &Customer) -> Result<(), RentalError>;

    /// Append a rent or return record
    fn append_record(&mut self, record: &RentalRecord) -> Result<(), RentalError>;
}
