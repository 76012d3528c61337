//! Benchmark suite for loading and replaying rental data
//!
//! Uses the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Inputs are generated in memory so the numbers do not depend on disk speed:
//! - `parse_records` - Parsing `rental_records.txt` content of increasing size
//! - `load_system` - Rebuilding a rental system (dedup, orphan filtering, status derivation)
//! - `rent_return_cycle` - Rent followed by return against the in-memory store

use chrono::NaiveDate;
use divan::Bencher;
use rust_decimal::Decimal;
use vehicle_rental_tracker::io::file_store::read_entries;
use vehicle_rental_tracker::io::line_format::{convert_record_line, RecordLine, RECORD_FIELDS};
use vehicle_rental_tracker::{Customer, MemoryStore, RentalSystem, Vehicle, VehicleCategory};

fn main() {
    divan::main();
}

fn plate(index: usize) -> String {
    let letters = [
        b'A' + (index / 676 % 26) as u8,
        b'A' + (index / 26 % 26) as u8,
        b'A' + (index % 26) as u8,
    ];
    format!("{}{:03}", String::from_utf8_lossy(&letters), index % 1000)
}

/// Alternating RENT/RETURN lines spread over 500 vehicles and 50 customers
fn records_content(lines: usize) -> String {
    let mut content = String::with_capacity(lines * 40);
    for i in 0..lines {
        let kind = if (i / 500) % 2 == 0 { "RENT" } else { "RETURN" };
        content.push_str(&format!(
            "{},{},2024-{:02}-{:02},{}.50,{}\n",
            plate(i % 500),
            i % 50,
            i % 12 + 1,
            i % 28 + 1,
            i % 200,
            kind
        ));
    }
    content
}

fn populated_store(records: usize) -> MemoryStore {
    let mut system = RentalSystem::load(MemoryStore::new());
    for i in 0..500 {
        let vehicle =
            Vehicle::with_plate(VehicleCategory::Car, &plate(i), "Toyota", "Camry", 2020)
                .expect("Generated plate is valid");
        system.add_vehicle(vehicle).expect("Generated plate is unique");
    }
    for id in 0..50 {
        system
            .add_customer(Customer::new(id, format!("Customer {}", id)))
            .expect("Generated id is unique");
    }

    let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("Valid date");
    for i in 0..records {
        let vehicle = plate(i % 500);
        let customer = (i % 50) as u32;
        if (i / 500) % 2 == 0 {
            let _ = system.rent_vehicle(&vehicle, customer, date, Decimal::new(50, 0));
        } else {
            let _ = system.return_vehicle(&vehicle, customer, date, Decimal::ZERO);
        }
    }

    system.into_store()
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn parse_records(bencher: Bencher, lines: usize) {
    let content = records_content(lines);

    bencher.bench(|| {
        read_entries::<_, RecordLine, _, _>(content.as_bytes(), RECORD_FIELDS, convert_record_line)
    });
}

#[divan::bench(args = [1_000, 10_000])]
fn load_system(bencher: Bencher, records: usize) {
    let store = populated_store(records);

    bencher
        .with_inputs(|| store.clone())
        .bench_values(RentalSystem::load);
}

#[divan::bench]
fn rent_return_cycle(bencher: Bencher) {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("Valid date");

    bencher
        .with_inputs(|| RentalSystem::load(populated_store(0)))
        .bench_local_values(|mut system| {
            system
                .rent_vehicle("AAA000", 0, date, Decimal::new(50, 0))
                .expect("Vehicle is available");
            system
                .return_vehicle("AAA000", 0, date, Decimal::ZERO)
                .expect("Vehicle is rented");
            system
        });
}
