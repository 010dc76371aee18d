//! Logger setup errors

/// Failure to install the global subscriber.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The filter directive string could not be parsed.
    #[error("invalid log filter `{directives}`: {reason}")]
    Filter {
        /// The rejected directives.
        directives: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("a global subscriber is already installed")]
    AlreadyInitialized,
}

/// Result type for logger setup.
pub type LogResult<T> = Result<T, LogError>;
