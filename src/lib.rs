//! Vehicle Rental Tracker Library
//! # Overview
//!
//! This library keeps lists of vehicles and customers, records rent and return
//! events, and mirrors all three to flat text files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Vehicle, Plate, Customer, RentalRecord, errors)
//! - [`cli`] - CLI argument parsing and command execution
//! - [`core`] - Business logic components:
//!   - [`core::rental_system`] - Rent/return state machine and entity lists
//!   - [`core::rental_history`] - Append-only log of rental events
//!   - [`core::traits`] - Storage interface injected into the rental system
//! - [`io`] - Flat-file and in-memory stores, console tables
//!
//! # Vehicle States
//!
//! Each vehicle is either:
//!
//! - **AVAILABLE**: can be rented (initial state)
//! - **RENTED**: out with a customer, can be returned
//!
//! A rent succeeds only on an available vehicle and a return only on a rented
//! one. A failed operation changes nothing.
//!
//! # License Plates
//!
//! Plates are exactly three letters followed by three digits (`AAA100`),
//! accepted in any case and stored uppercase.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{RentalHistory, RentalStore, RentalSystem};
pub use io::{FileStore, MemoryStore, StoreConfig};
pub use types::{
    Customer, CustomerId, Plate, RentalError, RentalKind, RentalRecord, Vehicle, VehicleCategory,
    VehicleStatus,
};
