//! Prints the permutation transition table as a nested array literal.
//!
//! Arguments are ignored. Diagnostics for violated invariants go to stdout
//! ahead of the table; log events go to stderr.
//!
//! ```bash
//! cargo run
//! RUST_LOG=permtable=debug cargo run
//! ```

use permtable::{TableGenerator, ViolationStrategy};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let generator = TableGenerator::builder()
        .on_violation(ViolationStrategy::IgnoreAndLog)
        .build();

    match generator.generate() {
        Ok(generation) => {
            for violation in &generation.violations {
                println!("{violation}");
            }
            println!("{}", generation.table);

            if generation.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            for violation in err.violations() {
                println!("{violation}");
            }
            ExitCode::FAILURE
        }
    }
}
