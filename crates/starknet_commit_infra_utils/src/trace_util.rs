use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Installs the global subscriber of a flow test: compact lines, captured by the test harness,
/// filtered by `RUST_LOG` (defaults to `INFO`). Only the first call in a test binary takes effect.
pub fn configure_tracing() {
    let fmt_layer = fmt::layer().compact().with_target(true).with_test_writer();
    let level_filter_layer =
        EnvFilter::builder().with_default_directive(DEFAULT_LEVEL.into()).from_env_lossy();

    let _ = tracing_subscriber::registry().with(fmt_layer).with(level_filter_layer).try_init();
}
