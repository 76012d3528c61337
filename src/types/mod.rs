//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `vehicle`: Plates, vehicle status/category and the Vehicle itself
//! - `customer`: Customer and its identifier
//! - `rental`: Rental records and their kind
//! - `error`: Error types for the rental tracker

pub mod customer;
pub mod error;
pub mod rental;
pub mod vehicle;

pub use customer::{Customer, CustomerId};
pub use error::RentalError;
pub use rental::{RentalKind, RentalRecord};
pub use vehicle::{Plate, Vehicle, VehicleCategory, VehicleStatus};
