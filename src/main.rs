//! Vehicle Rental Tracker CLI
//!
//! Command-line interface over the rental data files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- add-vehicle --category car --plate ABC123 --make Toyota --model Camry --year 2022
//! cargo run -- add-customer --id 1 --name "John Doe"
//! cargo run -- rent --plate ABC123 --customer 1 --amount 50
//! cargo run -- return --plate ABC123 --customer 1 --fees 10
//! cargo run -- --data-dir /srv/rental report
//! cargo run -- history --plate ABC123
//! ```
//!
//! The data files are read from the data directory on startup and appended to
//! as operations succeed. Set `RUST_LOG=info` to see operation logs and
//! `RUST_LOG=debug` to see skipped lines.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid plate, unknown vehicle or customer, vehicle in the wrong state, etc.)

use vehicle_rental_tracker::cli;
use vehicle_rental_tracker::{FileStore, RentalSystem};
use std::process;

fn main() {
    env_logger::init();

    let args = cli::parse_args();

    // Rebuild in-memory state from the data files
    let store = FileStore::new(args.to_store_config());
    let mut system = RentalSystem::load(store);

    let mut output = std::io::stdout();
    if let Err(e) = cli::execute(args.command, &mut system, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
