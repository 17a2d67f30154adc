//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default directives when `IQR_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "iqr=info,iqr_scan=info";

/// Install the stderr subscriber.
///
/// Reads per-target levels from `IQR_LOG`, e.g. `IQR_LOG=iqr=debug`.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("IQR_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
