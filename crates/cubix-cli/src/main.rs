//! Cubix CLI - find the real roots of a cubic polynomial.
//!
//! # Usage
//!
//! ```bash
//! # Roots of x^3 - x
//! echo "1 0 -1 0" | cubix
//! # -1.00 0.00 1.00
//!
//! # Trace every interval of the scan on stderr
//! echo "1 -6 11 -6" | cubix -vvv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use cubix_math::scan::scan_roots;

mod cli;
mod error;
mod input;
mod logging;
mod output;

use cli::Cli;
use error::CliResult;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_level());

    run()?;

    Ok(())
}

fn run() -> CliResult<()> {
    let cubic = input::read_coefficients(std::io::stdin().lock())?;
    info!("Scanning {} for roots", cubic);

    let roots = scan_roots(&cubic)?;
    debug!(
        found = roots.len(),
        discarded = roots.discarded(),
        "Scan complete"
    );

    output::print_roots(&roots)?;
    Ok(())
}
