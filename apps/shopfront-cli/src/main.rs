//! # Shopfront Entry Point
//!
//! Runs the sample checkout once. Takes no arguments; see
//! [`shopfront_cli::config`] for the settings it reads.

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shopfront_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Shopfront run failed");
            ExitCode::FAILURE
        }
    }
}
