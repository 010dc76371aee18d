//! Rule chains described as data.
//!
//! Every rule kind except `custom_function` can be read from JSON (or any
//! other serde format). Rules are internally tagged by `kind`:
//!
//! ```
//! use vcfield_validator::config::ChainConfig;
//!
//! let chain = ChainConfig::from_json(r#"{
//!     "rules": [
//!         { "kind": "required", "message": "Enter an amount" },
//!         { "kind": "maximum_value", "max": 5000, "message": "Limit is 5000" }
//!     ]
//! }"#)
//! .unwrap()
//! .build()
//! .unwrap();
//!
//! assert_eq!(chain.evaluate(Some("7.500")).message.as_deref(), Some("Limit is 5000"));
//! ```

use serde::{Deserialize, Serialize};

use crate::chain::ValidatorChain;
use crate::error::RuleError;
use crate::rule::{RuleKind, ValidationRule};
use crate::validators::{Phone, PhoneMode, TransactionDay};

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to turn configuration into rules.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The document is not valid JSON or does not describe rules.
    #[error("invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule's parameters were rejected.
    #[error("rule #{index} ({kind}) is invalid: {source}")]
    Rule {
        /// Position of the rule in the list.
        index: usize,
        /// Kind of the rejected rule.
        kind: RuleKind,
        /// Why it was rejected.
        #[source]
        source: RuleError,
    },
}

// ============================================================================
// RULE CONFIG
// ============================================================================

const fn default_min_digits() -> u8 {
    Phone::DEFAULT_MIN_DIGITS
}

const fn default_max_digits() -> u8 {
    Phone::DEFAULT_MAX_DIGITS
}

const fn default_first_day() -> u8 {
    1
}

const fn default_last_day() -> u8 {
    TransactionDay::LAST_DAY
}

/// One rule as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    Required {
        message: String,
    },
    TrimRequired {
        message: String,
    },
    MinimumLength {
        min: usize,
        message: String,
    },
    MinimumValue {
        min: f64,
        message: String,
    },
    MaximumValue {
        max: f64,
        message: String,
    },
    CreditCardNumber {
        message: String,
    },
    PhoneNumber {
        #[serde(default)]
        mode: PhoneMode,
        #[serde(default = "default_min_digits")]
        min_digits: u8,
        #[serde(default = "default_max_digits")]
        max_digits: u8,
        message: String,
    },
    OnlyNumbers {
        message: String,
    },
    TransactionDay {
        #[serde(default = "default_first_day")]
        first: u8,
        #[serde(default = "default_last_day")]
        last: u8,
        message: String,
    },
    Regex {
        pattern: String,
        message: String,
    },
    PlateFormat {
        message: String,
    },
}

impl RuleConfig {
    /// The kind of rule this entry builds.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Required { .. } => RuleKind::Required,
            Self::TrimRequired { .. } => RuleKind::TrimRequired,
            Self::MinimumLength { .. } => RuleKind::MinimumLength,
            Self::MinimumValue { .. } => RuleKind::MinimumValue,
            Self::MaximumValue { .. } => RuleKind::MaximumValue,
            Self::CreditCardNumber { .. } => RuleKind::CreditCardNumber,
            Self::PhoneNumber { .. } => RuleKind::PhoneNumber,
            Self::OnlyNumbers { .. } => RuleKind::OnlyNumbers,
            Self::TransactionDay { .. } => RuleKind::TransactionDay,
            Self::Regex { .. } => RuleKind::Regex,
            Self::PlateFormat { .. } => RuleKind::PlateFormat,
        }
    }
}

impl TryFrom<RuleConfig> for ValidationRule {
    type Error = RuleError;

    fn try_from(config: RuleConfig) -> Result<Self, Self::Error> {
        let rule = match config {
            RuleConfig::Required { message } => Self::required(message),
            RuleConfig::TrimRequired { message } => Self::trim_required(message),
            RuleConfig::MinimumLength { min, message } => Self::minimum_length(min, message),
            RuleConfig::MinimumValue { min, message } => Self::minimum_value(min, message),
            RuleConfig::MaximumValue { max, message } => Self::maximum_value(max, message),
            RuleConfig::CreditCardNumber { message } => Self::credit_card_number(message),
            RuleConfig::PhoneNumber {
                mode,
                min_digits,
                max_digits,
                message,
            } => Self::phone_number_with(
                Phone::new(mode).digit_range(min_digits, max_digits)?,
                message,
            ),
            RuleConfig::OnlyNumbers { message } => Self::only_numbers(message),
            RuleConfig::TransactionDay {
                first,
                last,
                message,
            } => Self::transaction_day_between(first, last, message)?,
            RuleConfig::Regex { pattern, message } => Self::regex(&pattern, message)?,
            RuleConfig::PlateFormat { message } => Self::plate_format(message),
        };
        Ok(rule)
    }
}

// ============================================================================
// CHAIN CONFIG
// ============================================================================

/// An ordered list of rules as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl ChainConfig {
    /// Parses a JSON document of the form `{ "rules": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the chain, reporting the first rule that cannot be built.
    pub fn build(self) -> Result<ValidatorChain, ConfigError> {
        self.rules
            .into_iter()
            .enumerate()
            .map(|(index, config)| {
                let kind = config.kind();
                ValidationRule::try_from(config).map_err(|source| ConfigError::Rule {
                    index,
                    kind,
                    source,
                })
            })
            .collect()
    }
}

impl TryFrom<ChainConfig> for ValidatorChain {
    type Error = ConfigError;

    fn try_from(config: ChainConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

// ============================================================================
// TESTS
// ============================================================================
