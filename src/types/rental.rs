//! Rental record types
//!
//! A rental record is an immutable snapshot of one rent or return event. The
//! vehicle and customer are referenced by key (plate and customer id) and
//! resolved through the rental system.

use super::customer::CustomerId;
use super::error::RentalError;
use super::vehicle::Plate;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Kind of rental event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalKind {
    /// Vehicle handed out; amount is the rental charge
    Rent,
    /// Vehicle brought back; amount is the extra fees charged
    Return,
}

impl RentalKind {
    /// Label used in the data files and reports
    pub fn label(&self) -> &'static str {
        match self {
            RentalKind::Rent => "RENT",
            RentalKind::Return => "RETURN",
        }
    }
}

impl FromStr for RentalKind {
    type Err = RentalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RENT" => Ok(RentalKind::Rent),
            "RETURN" => Ok(RentalKind::Return),
            other => Err(RentalError::parse_error(
                None,
                format!("unknown rental kind '{}'", other),
            )),
        }
    }
}

impl fmt::Display for RentalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rent or return event
///
/// Records are never mutated once created; the history only appends.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalRecord {
    plate: Plate,
    customer_id: CustomerId,
    date: NaiveDate,
    amount: Decimal,
    kind: RentalKind,
}

impl RentalRecord {
    pub fn new(
        plate: Plate,
        customer_id: CustomerId,
        date: NaiveDate,
        amount: Decimal,
        kind: RentalKind,
    ) -> Self {
        RentalRecord {
            plate,
            customer_id,
            date,
            amount,
            kind,
        }
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> RentalKind {
        self.kind
    }
}
