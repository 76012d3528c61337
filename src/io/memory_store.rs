//! In-memory store
//!
//! Keeps appended entries in vectors, with the same append-only semantics as
//! the flat files: a vehicle is stored as it was when registered and later
//! status flips only show up as rental records.

use crate::core::RentalStore;
use crate::types::{Customer, RentalError, RentalRecord, Vehicle};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    records: Vec<RentalRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }
}

impl RentalStore for MemoryStore {
    fn load_vehicles(&self) -> Result<Vec<Vehicle>, RentalError> {
        Ok(self.vehicles.clone())
    }

    fn load_customers(&self) -> Result<Vec<Customer>, RentalError> {
        Ok(self.customers.clone())
    }

    fn load_records(&self) -> Result<Vec<RentalRecord>, RentalError> {
        Ok(self.records.clone())
    }

    fn append_vehicle(&mut self, vehicle: &Vehicle) -> Result<(), RentalError> {
        self.vehicles.push(vehicle.clone());
        Ok(())
    }

    fn append_customer(&mut self, customer: &Customer) -> Result<(), RentalError> {
        self.customers.push(customer.clone());
        Ok(())
    }

    fn append_record(&mut self, record: &RentalRecord) -> Result<(), RentalError> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{VehicleCategory, VehicleStatus};

    #[test]
    fn test_stored_vehicle_is_a_snapshot() {
        let mut store = MemoryStore::new();
        let mut vehicle =
            Vehicle::with_plate(VehicleCategory::Car, "ABC123", "Toyota", "Camry", 2022).unwrap();

        store.append_vehicle(&vehicle).unwrap();
        vehicle.set_status(VehicleStatus::Rented);

        let loaded = store.load_vehicles().unwrap();
        assert_eq!(loaded[0].status(), VehicleStatus::Available);
    }
}
