//! Errors raised while *building* rules.
//!
//! Evaluating a rule never fails: a value that cannot be checked is simply
//! invalid. Construction can fail when a parameter is unusable.

/// A rule parameter was rejected at construction time.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// The regular expression does not compile.
    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The compiler error.
        #[source]
        source: regex::Error,
    },

    /// A transaction-day range that is empty or leaves `1..=31`.
    #[error("invalid day range {first}..={last}: days must satisfy 1 <= first <= last <= 31")]
    InvalidDayRange {
        /// First accepted day.
        first: u8,
        /// Last accepted day.
        last: u8,
    },

    /// A phone digit-count range with `min > max`.
    #[error("invalid phone digit range {min}..={max}: min must not exceed max")]
    InvalidDigitRange {
        /// Fewest digits accepted.
        min: u8,
        /// Most digits accepted.
        max: u8,
    },
}

/// Result alias for rule construction.
pub type RuleResult<T> = Result<T, RuleError>;
