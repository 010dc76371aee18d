//! # vcfield-validator
//!
//! Ordered, short-circuiting validation rules for a single text-input field.
//!
//! ## Quick Start
//!
//! ```
//! use vcfield_validator::prelude::*;
//!
//! let chain = ValidatorChain::new()
//!     .rule(ValidationRule::required("Enter your card number"))
//!     .rule(ValidationRule::credit_card_number("Card number is invalid"));
//!
//! assert_eq!(chain.evaluate(None), Evaluation::invalid("Enter your card number"));
//! assert_eq!(chain.evaluate(Some("4111 1111 1111 1111")), Evaluation::valid());
//! ```
//!
//! ## Layers
//!
//! - [`validators`]: format checks over a present `&str`, each returning a
//!   structured [`ValidationError`](foundation::ValidationError).
//! - [`rule`]: a [`ValidationRule`](rule::ValidationRule) pairs one rule kind
//!   with a user-facing message and decides how an absent value is treated.
//! - [`chain`]: evaluates rules in order and stops at the first failure.
//! - [`config`]: builds chains from serde data (feature `serde`).

pub mod chain;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule;
pub mod validators;
