//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads the `CURBSIDE_LOG` environment variable for log levels, e.g.
/// `CURBSIDE_LOG=curbside_core=debug`. Falls back to `curbside=info` when
/// unset or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CURBSIDE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("curbside=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
