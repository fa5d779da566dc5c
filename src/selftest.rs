use std::io;
use std::process;

use byte_caesar::driver::{run, Case};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout only ever carries the mismatch line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&Case::default(), &mut io::stdout().lock()) {
        Ok(outcome) => process::exit(outcome.status()),
        Err(e) => {
            error!("self-check could not run: {}", e);
            process::exit(1);
        }
    }
}
