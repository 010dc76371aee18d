//! Prelude module for convenient imports.
//!
//! ```
//! use vcfield_validator::prelude::*;
//!
//! let rules = [ValidationRule::minimum_length(3, "Too short")];
//! assert!(!evaluate(&rules, Some("ab")).valid);
//! ```

pub use crate::chain::{Evaluation, RuleViolation, ValidatorChain, check, evaluate};
pub use crate::error::{RuleError, RuleResult};
pub use crate::foundation::{Validate, ValidationError};
pub use crate::rule::{Predicate, Rule, RuleKind, ValidationRule};

#[cfg(feature = "serde")]
pub use crate::config::{ChainConfig, ConfigError, RuleConfig};
