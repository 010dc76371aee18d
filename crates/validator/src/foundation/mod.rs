//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`]
//!
//! Format validators implement [`Validate`] over `str` and report failures as
//! a structured [`ValidationError`]:
//!
//! ```
//! use vcfield_validator::foundation::Validate;
//! use vcfield_validator::validators::min_length;
//!
//! let validator = min_length(5);
//! assert!(validator.validate("hello").is_ok());
//! assert_eq!(validator.validate("hi").unwrap_err().code, "min_length");
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
