//! Tracing subscriber setup for binaries and tests embedding the canvas.
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "nodeboard=info";

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once: later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a fmt subscriber with an explicit filter directive.
pub fn init_with_filter(directives: &str) {
    install(EnvFilter::new(directives));
}

fn install(filter: EnvFilter) {
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
