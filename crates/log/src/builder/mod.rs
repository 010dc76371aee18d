//! Subscriber installation

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

/// Installs `Registry + filter + layer` as the global default.
macro_rules! install {
    ($filter:expr, $layer:expr) => {
        Registry::default()
            .with($filter)
            .with($layer)
            .try_init()
            .map_err(|_| LogError::AlreadyInitialized)
    };
}

fn filter(config: &Config) -> LogResult<EnvFilter> {
    EnvFilter::try_new(&config.level).map_err(|e| LogError::Filter {
        directives: config.level.clone(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns [`LogError::Filter`] when `config.level` cannot be parsed and
/// [`LogError::AlreadyInitialized`] when a subscriber is already set.
pub fn init(config: Config) -> LogResult<()> {
    let filter = filter(&config)?;

    let base = fmt::layer()
        .with_ansi(config.ansi)
        .with_target(config.target)
        .with_file(config.source)
        .with_line_number(config.source);

    // Timer type differs between with and without time, hence the split.
    match (config.format, config.time) {
        (Format::Pretty, true) => install!(filter, base.pretty()),
        (Format::Pretty, false) => install!(filter, base.pretty().without_time()),
        (Format::Compact, true) => install!(filter, base.compact()),
        (Format::Compact, false) => install!(filter, base.compact().without_time()),
        (Format::Json, true) => install!(filter, base.json().with_ansi(false)),
        (Format::Json, false) => install!(filter, base.json().with_ansi(false).without_time()),
    }?;

    tracing::debug!(format = %config.format, level = %config.level, "logger initialized");
    Ok(())
}

/// Installs a test-friendly subscriber that writes through the test harness.
///
/// Safe to call from every test: later calls are no-ops.
pub fn try_init_test() {
    let config = Config::test();
    let Ok(filter) = filter(&config) else {
        return;
    };
    let layer = fmt::layer()
        .with_test_writer()
        .with_ansi(false)
        .without_time()
        .compact();
    let _ = install!(filter, layer);
}
