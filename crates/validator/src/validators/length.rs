//! String length validators
//!
//! Length is measured in Unicode scalar values (chars), so `"çağ"` has a
//! length of three. This is not the grapheme count a user sees: a letter
//! followed by a combining mark (`"e\u{301}"`, rendered `é`) counts as two.
//! Precomposed `"\u{e9}"` counts as one.

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { char_len(input) >= self.min }
    error(self, input) { ValidationError::min_length(self.min, char_len(input)) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { char_len(input) <= self.max }
    error(self, input) {
        ValidationError::new("max_length", format!("Must be at most {} characters", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", char_len(input).to_string())
    }
    fn max_length(max: usize);
}

// ============================================================================
// TESTS
// ============================================================================
