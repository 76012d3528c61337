//! I/O module
//!
//! Handles persistence and console output.
//!
//! # Components
//!
//! - `line_format` - Flat-file line layout (line conversion, field rendering)
//! - `file_store` - RentalStore over the three data files
//! - `memory_store` - RentalStore kept in memory
//! - `report` - Console tables

pub mod file_store;
pub mod line_format;
pub mod memory_store;
pub mod report;

pub use file_store::{FileStore, StoreConfig};
pub use memory_store::MemoryStore;
pub use report::{write_customer_table, write_history_table, write_summary, write_vehicle_table};
