// ABOUTME: Process entry points for the laundry tracker
// ABOUTME: Logging setup, command definitions and the HTTP server runner

use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod server;

pub use commands::{handle_command, Cli, Commands};
pub use server::run_server;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
