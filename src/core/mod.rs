//! Core business logic module
//!
//! This module contains the rental components:
//! - `traits` - Storage abstraction injected into the rental system
//! - `rental_system` - Rent/return state machine and entity lists
//! - `rental_history` - Append-only log of rent and return events

pub mod rental_history;
pub mod rental_system;
pub mod traits;

pub use rental_history::RentalHistory;
pub use rental_system::RentalSystem;
pub use traits::RentalStore;
