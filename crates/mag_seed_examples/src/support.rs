//! Shared support for the example binaries.
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes tracing for the example binaries.
///
/// Use the `RUST_LOG` environment variable to override the default filter.
/// Default is `info` for mag_seed and the examples, `warn` for others.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,mag_seed=info,mag_seed_examples=info"));

    fmt().with_env_filter(filter).with_target(false).init();
}
