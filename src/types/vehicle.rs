//! Vehicle-related types for the rental tracker
//!
//! This module defines the validated license plate, the vehicle status and
//! category enums, and the Vehicle structure itself.

use super::error::RentalError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{3}[0-9]{3}$").expect("plate pattern compiles"));

/// Validated license plate
///
/// Always three ASCII letters followed by three ASCII digits, stored in
/// uppercase (e.g. `ABC123`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Plate(String);

impl Plate {
    /// Parse and normalize a license plate
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidPlate` if the input is not exactly
    /// 3 letters followed by 3 digits (case-insensitive).
    pub fn parse(input: &str) -> Result<Self, RentalError> {
        if PLATE_RE.is_match(input) {
            Ok(Plate(input.to_ascii_uppercase()))
        } else {
            Err(RentalError::invalid_plate(input))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw string
    pub fn matches(&self, raw: &str) -> bool {
        self.0.eq_ignore_ascii_case(raw.trim())
    }
}

impl FromStr for Plate {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plate::parse(s)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rental status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VehicleStatus {
    /// Vehicle is on the lot and can be rented
    #[default]
    Available,
    /// Vehicle is out with a customer
    Rented,
}

impl VehicleStatus {
    /// Label used in the data files and reports
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "AVAILABLE",
            VehicleStatus::Rented => "RENTED",
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVAILABLE" => Ok(VehicleStatus::Available),
            "RENTED" => Ok(VehicleStatus::Rented),
            other => Err(RentalError::parse_error(
                None,
                format!("unknown vehicle status '{}'", other),
            )),
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vehicle category
///
/// Carries no behavior beyond the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleCategory {
    Car,
    Motorcycle,
}

impl VehicleCategory {
    /// Label used in the data files and reports
    pub fn label(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Motorcycle => "Motorcycle",
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleCategory::Car),
            "motorcycle" => Ok(VehicleCategory::Motorcycle),
            other => Err(RentalError::parse_error(
                None,
                format!("unknown vehicle type '{}'", other),
            )),
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rentable vehicle
///
/// Owned by the rental system's vehicle list and mutated in place when it is
/// rented or returned. The plate may be unset; an unplated vehicle can be
/// registered but never rented, since rentals are keyed by plate.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    license_plate: Option<Plate>,
    make: String,
    model: String,
    year: i32,
    status: VehicleStatus,
    category: VehicleCategory,
}

impl Vehicle {
    /// Create an available vehicle with no plate
    pub fn new(
        category: VehicleCategory,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Self {
        Vehicle {
            license_plate: None,
            make: make.into(),
            model: model.into(),
            year,
            status: VehicleStatus::Available,
            category,
        }
    }

    /// Create an available vehicle with a validated plate
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidPlate` if `plate` is malformed.
    pub fn with_plate(
        category: VehicleCategory,
        plate: &str,
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
    ) -> Result<Self, RentalError> {
        let mut vehicle = Vehicle::new(category, make, model, year);
        vehicle.license_plate = Some(Plate::parse(plate)?);
        Ok(vehicle)
    }

    /// Set or clear the license plate
    ///
    /// `None` and `""` clear the plate. Any other input must be exactly 3
    /// letters followed by 3 digits, with no surrounding whitespace, and is
    /// stored uppercased.
    ///
    /// # Errors
    ///
    /// Returns `RentalError::InvalidPlate` for malformed input; the current
    /// plate is left untouched.
    pub fn set_license_plate(&mut self, plate: Option<&str>) -> Result<(), RentalError> {
        self.license_plate = match plate {
            None | Some("") => None,
            Some(raw) => Some(Plate::parse(raw)?),
        };
        Ok(())
    }

    pub fn license_plate(&self) -> Option<&Plate> {
        self.license_plate.as_ref()
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn set_status(&mut self, status: VehicleStatus) {
        self.status = status;
    }

    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// Whether this vehicle carries the given plate (case-insensitive)
    pub fn has_plate(&self, raw: &str) -> bool {
        self.license_plate
            .as_ref()
            .is_some_and(|plate| plate.matches(raw))
    }
}
