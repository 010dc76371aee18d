//! Built-in format validators
//!
//! Each validator checks a present `&str`. The rule layer
//! ([`ValidationRule`](crate::rule::ValidationRule)) decides what an absent
//! value means and which user-facing message a failure carries.
//!
//! # Categories
//!
//! - **Presence**: [`NotEmpty`], [`NotBlank`]
//! - **Length**: [`MinLength`], [`MaxLength`]
//! - **Numeric**: [`MinValue`], [`MaxValue`]
//! - **Character classes**: [`Digits`], [`Alphanumeric`], [`MatchesRegex`]
//! - **Formats**: [`CreditCard`], [`Phone`], [`TransactionDay`], [`Plate`]

pub mod credit_card;
pub mod day;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod phone;
pub mod plate;
pub mod presence;

pub use credit_card::{CreditCard, credit_card};
pub use day::{TransactionDay, transaction_day};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use numeric::{MaxValue, MinValue, digits_of, max_value, min_value};
pub use pattern::{Alphanumeric, Digits, MatchesRegex, alphanumeric, digits, matches_regex};
pub use phone::{Phone, PhoneMode};
pub use plate::{Plate, plate};
pub use presence::{NotBlank, NotEmpty, not_blank, not_empty};
