//! Tracing initialization for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// Reads `GEOFIX_LOG` for the filter (`GEOFIX_LOG=geofix_core=debug`), falling
/// back to `geofix=info`. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("GEOFIX_LOG").unwrap_or_else(|_| EnvFilter::new("geofix=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
