//! Configuration presets for common scenarios

use super::{Config, Format};

/// Filter directives, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "VCFIELD_LOG";
/// Output format name.
pub const FORMAT_ENV: &str = "VCFIELD_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    ///
    /// Reads `VCFIELD_LOG` (falling back to `RUST_LOG`) and
    /// `VCFIELD_LOG_FORMAT`. Unset or unrecognised values keep the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_ENV).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        // Unknown names keep the default format.
        if let Some(format) = lookup(FORMAT_ENV).and_then(|f| f.parse::<Format>().ok()) {
            config.format = format;
        }

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            source: true,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            ansi: false,
            ..Self::default()
        }
    }

    /// Test configuration (trace level, no colors or timestamps)
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_owned(),
            format: Format::Compact,
            ansi: false,
            time: false,
            ..Self::default()
        }
    }
}
