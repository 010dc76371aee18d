//! Presence validators
//!
//! [`NotEmpty`] backs the `Required` rule and [`NotBlank`] backs the
//! `TrimRequired` rule. Neither knows about absent values: the rule maps
//! `None` to `""` (or fails outright) before calling them.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a string is not empty.
    ///
    /// Whitespace counts as content; use [`NotBlank`] to reject it.
    pub NotEmpty for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new("not_empty", "String must not be empty") }
    fn not_empty();
}

crate::validator! {
    /// Validates that a string has content other than whitespace.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    error(input) {
        ValidationError::new("not_blank", "String must not be blank")
            .with_param("length", input.chars().count().to_string())
    }
    fn not_blank();
}
