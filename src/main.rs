//! rFintrack main entrypoint.

use rfintrack::run;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // Diagnostics on stderr, quiet unless RUST_LOG asks for more.
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
