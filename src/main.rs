//! Orbit Map - orbit counts and transfer hops from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = orbit_map::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
