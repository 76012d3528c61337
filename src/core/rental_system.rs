//! Rental system orchestration
//!
//! This module provides the RentalSystem that owns the vehicle and customer
//! lists and the rental history, and mirrors every change to an injected
//! [`RentalStore`].
//!
//! The system enforces the rent/return state machine:
//! - A vehicle goes AVAILABLE → RENTED only through a successful rent
//! - A vehicle goes RENTED → AVAILABLE only through a successful return
//! - A failed operation leaves every list untouched
//!
//! Store failures never fail an operation. They are logged and the in-memory
//! state stays authoritative for the rest of the process.

use crate::core::rental_history::RentalHistory;
use crate::core::traits::RentalStore;
use crate::types::{
    Customer, CustomerId, Plate, RentalError, RentalKind, RentalRecord, Vehicle, VehicleStatus,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Vehicle rental system
///
/// Callers own an instance and pass it (or a reference to it) wherever rental
/// operations are needed.
pub struct RentalSystem<S: RentalStore> {
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    history: RentalHistory,
    store: S,
}

impl<S: RentalStore> RentalSystem<S> {
    /// Build a rental system from the contents of a store
    ///
    /// Vehicles and customers are loaded first (first occurrence wins for a
    /// repeated plate or id). Rental records are then kept only when both the
    /// plate and the customer id resolve; orphaned records are dropped. Finally
    /// each vehicle's status is derived from its most recent record, since the
    /// vehicle list itself is append-only and never rewritten on a status flip.
    ///
    /// A store that fails to load a list is logged and treated as empty.
    pub fn load(store: S) -> Self {
        let mut system = RentalSystem {
            vehicles: Vec::new(),
            customers: Vec::new(),
            history: RentalHistory::new(),
            store,
        };

        let mut seen_plates = HashSet::new();
        for vehicle in load_or_empty("vehicles", system.store.load_vehicles()) {
            if let Some(plate) = vehicle.license_plate() {
                if !seen_plates.insert(plate.clone()) {
                    log::debug!("Skipping duplicate vehicle {}", plate);
                    continue;
                }
            }
            system.vehicles.push(vehicle);
        }

        let mut seen_ids = HashSet::new();
        for customer in load_or_empty("customers", system.store.load_customers()) {
            if !seen_ids.insert(customer.id()) {
                log::debug!("Skipping duplicate customer {}", customer.id());
                continue;
            }
            system.customers.push(customer);
        }

        for record in load_or_empty("rental records", system.store.load_records()) {
            if seen_plates.contains(record.plate()) && seen_ids.contains(&record.customer_id()) {
                system.history.add_record(record);
            } else {
                log::debug!(
                    "Dropping rental record for unknown vehicle {} or customer {}",
                    record.plate(),
                    record.customer_id()
                );
            }
        }

        let history = &system.history;
        for vehicle in system.vehicles.iter_mut() {
            let last_kind = vehicle
                .license_plate()
                .and_then(|plate| history.last_for_vehicle(plate))
                .map(RentalRecord::kind);
            match last_kind {
                Some(RentalKind::Rent) => vehicle.set_status(VehicleStatus::Rented),
                Some(RentalKind::Return) => vehicle.set_status(VehicleStatus::Available),
                None => {}
            }
        }

        system
    }

    /// Register a vehicle and persist it
    ///
    /// # Errors
    ///
    /// Returns `RentalError::LineBreakInField` if the make or model contains a
    /// line break, and `RentalError::DuplicateVehicle` if another vehicle
    /// already has the same plate. Unplated vehicles are always accepted.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), RentalError> {
        check_single_line("Make", vehicle.make())?;
        check_single_line("Model", vehicle.model())?;
        if let Some(plate) = vehicle.license_plate() {
            if self.find_vehicle_by_plate(plate.as_str()).is_some() {
                return Err(RentalError::duplicate_vehicle(plate.as_str()));
            }
        }

        log_store_failure("vehicle", self.store.append_vehicle(&vehicle));
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Register a customer and persist it
    ///
    /// # Errors
    ///
    /// Returns `RentalError::LineBreakInField` if the name contains a line
    /// break, and `RentalError::DuplicateCustomer` if the id is already taken.
    pub fn add_customer(&mut self, customer: Customer) -> Result<(), RentalError> {
        check_single_line("Customer name", customer.name())?;
        if self.find_customer_by_id(customer.id()).is_some() {
            return Err(RentalError::duplicate_customer(customer.id()));
        }

        log_store_failure("customer", self.store.append_customer(&customer));
        self.customers.push(customer);
        Ok(())
    }

    /// Rent an available vehicle to a customer
    ///
    /// On success the vehicle is marked RENTED, a RENT record carrying the
    /// rental `amount` is appended to the history and persisted, and the
    /// record is returned.
    ///
    /// # Errors
    ///
    /// Returns an error, without changing any state, if:
    /// - No vehicle has the given plate
    /// - No customer has the given id
    /// - The vehicle is already rented
    pub fn rent_vehicle(
        &mut self,
        plate: &str,
        customer_id: CustomerId,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<RentalRecord, RentalError> {
        self.transition(plate, customer_id, date, amount, RentalKind::Rent)
    }

    /// Take back a rented vehicle
    ///
    /// On success the vehicle is marked AVAILABLE, a RETURN record carrying the
    /// extra `fees` is appended to the history and persisted, and the record
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error, without changing any state, if:
    /// - No vehicle has the given plate
    /// - No customer has the given id
    /// - The vehicle is not currently rented
    pub fn return_vehicle(
        &mut self,
        plate: &str,
        customer_id: CustomerId,
        date: NaiveDate,
        fees: Decimal,
    ) -> Result<RentalRecord, RentalError> {
        self.transition(plate, customer_id, date, fees, RentalKind::Return)
    }

    fn transition(
        &mut self,
        plate: &str,
        customer_id: CustomerId,
        date: NaiveDate,
        amount: Decimal,
        kind: RentalKind,
    ) -> Result<RentalRecord, RentalError> {
        let (index, plate) = self.locate_vehicle(plate)?;
        let customer_name = self
            .find_customer_by_id(customer_id)
            .map(|customer| customer.name().to_string())
            .ok_or_else(|| RentalError::customer_not_found(customer_id))?;

        let (from, to) = match kind {
            RentalKind::Rent => (VehicleStatus::Available, VehicleStatus::Rented),
            RentalKind::Return => (VehicleStatus::Rented, VehicleStatus::Available),
        };

        let vehicle = &mut self.vehicles[index];
        if vehicle.status() != from {
            return Err(match kind {
                RentalKind::Rent => RentalError::vehicle_not_available(plate.as_str()),
                RentalKind::Return => RentalError::vehicle_not_rented(plate.as_str()),
            });
        }
        vehicle.set_status(to);

        let record = RentalRecord::new(plate, customer_id, date, amount, kind);
        self.history.add_record(record.clone());
        log_store_failure("rental record", self.store.append_record(&record));

        match kind {
            RentalKind::Rent => log::info!("Vehicle {} rented to {}", record.plate(), customer_name),
            RentalKind::Return => {
                log::info!("Vehicle {} returned by {}", record.plate(), customer_name)
            }
        }

        Ok(record)
    }

    fn locate_vehicle(&self, raw: &str) -> Result<(usize, Plate), RentalError> {
        self.vehicles
            .iter()
            .enumerate()
            .find_map(|(index, vehicle)| {
                vehicle
                    .license_plate()
                    .filter(|plate| plate.matches(raw))
                    .map(|plate| (index, plate.clone()))
            })
            .ok_or_else(|| RentalError::vehicle_not_found(raw.trim()))
    }

    /// Find a vehicle by plate (case-insensitive)
    pub fn find_vehicle_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.has_plate(plate))
    }

    pub fn find_customer_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id() == id)
    }

    /// Find a customer by name (case-insensitive)
    pub fn find_customer_by_name(&self, name: &str) -> Option<&Customer> {
        let name = name.trim();
        self.customers
            .iter()
            .find(|customer| customer.name().eq_ignore_ascii_case(name))
    }

    /// All vehicles in registration order
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles that can currently be rented, in registration order
    pub fn available_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|vehicle| vehicle.is_available())
            .collect()
    }

    /// All customers in registration order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn history(&self) -> &RentalHistory {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the system and hand back its store
    pub fn into_store(self) -> S {
        self.store
    }
}

fn load_or_empty<T>(what: &str, result: Result<Vec<T>, RentalError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        log::warn!("Error reading {}: {}", what, e);
        Vec::new()
    })
}

/// Every entity is persisted as one line
fn check_single_line(field: &str, value: &str) -> Result<(), RentalError> {
    if value.contains(['\n', '\r']) {
        return Err(RentalError::line_break_in_field(field));
    }
    Ok(())
}

fn log_store_failure(what: &str, result: Result<(), RentalError>) {
    if let Err(e) = result {
        log::warn!("Error saving {}: {}", what, e);
    }
}
