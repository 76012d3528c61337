//! Rental history log
//!
//! This module provides the RentalHistory component, an append-only log of
//! rent and return events. Insertion order is the chronological order in
//! which the operations were performed (or the order of the records file on
//! reload).

use crate::types::{CustomerId, Plate, RentalRecord};

/// Append-only, ordered log of rental records
#[derive(Debug, Clone, Default)]
pub struct RentalHistory {
    records: Vec<RentalRecord>,
}

impl RentalHistory {
    /// Create an empty history
    pub fn new() -> Self {
        RentalHistory {
            records: Vec::new(),
        }
    }

    /// Append a record at the end of the log
    pub fn add_record(&mut self, record: RentalRecord) {
        self.records.push(record);
    }

    /// All records in insertion order
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Records for one vehicle, in insertion order
    pub fn for_vehicle<'a>(&'a self, plate: &'a Plate) -> impl Iterator<Item = &'a RentalRecord> {
        self.records.iter().filter(move |r| r.plate() == plate)
    }

    /// Records for one customer, in insertion order
    pub fn for_customer(&self, customer_id: CustomerId) -> impl Iterator<Item = &RentalRecord> {
        self.records
            .iter()
            .filter(move |r| r.customer_id() == customer_id)
    }

    /// Most recent record for a vehicle
    pub fn last_for_vehicle(&self, plate: &Plate) -> Option<&RentalRecord> {
        self.records.iter().rev().find(|r| r.plate() == plate)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
