//! Diagnostic tracing for toybox commands.
//!
//! Library crates emit `tracing` events (a warning for every word that could
//! not be placed, debug events for each placement). This module routes them
//! to stderr so stdout carries only command output.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=wordsearch=debug toybox grid cat dog
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
