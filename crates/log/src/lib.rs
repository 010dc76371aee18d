//! # vcfield-log
//!
//! Subscriber setup for the `tracing` events emitted by the vcfield crates.
//!
//! The library crates only emit events. Binaries and tests decide where they
//! go by installing a subscriber once:
//!
//! ```no_run
//! use vcfield_log::{Config, init};
//!
//! fn main() -> Result<(), vcfield_log::LogError> {
//!     init(Config::from_env())?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```
//!
//! Filter directives use the [`EnvFilter`](tracing_subscriber::EnvFilter)
//! syntax, e.g. `vcfield_field=debug,vcfield_validator=trace`.

mod builder;
pub mod config;
mod error;

pub use builder::{init, try_init_test};
pub use config::{Config, Format};
pub use error::{LogError, LogResult};

// Re-export the macros so callers need a single dependency.
pub use tracing::{debug, error, info, trace, warn};
