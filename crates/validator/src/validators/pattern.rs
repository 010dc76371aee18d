//! Character-class and regular-expression validators

use crate::foundation::ValidationError;

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

crate::validator! {
    /// Validates that a string is non-empty and made only of ASCII digits.
    pub Digits for str;
    rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) }
    error(input) { ValidationError::new("digits", "String must contain only digits") }
    fn digits();
}

crate::validator! {
    /// Validates that a string contains only letters and numbers.
    ///
    /// Letters include non-ASCII alphabetic characters such as `ş` or `é`.
    pub Alphanumeric for str;
    rule(input) { input.chars().all(char::is_alphanumeric) }
    error(input) {
        ValidationError::new("alphanumeric", "String must contain only letters and numbers")
    }
    fn alphanumeric();
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that the *whole* string matches a regular expression.
    ///
    /// The pattern is anchored at construction, so `matches_regex("[0-9]+")`
    /// rejects `"12a"` even though a prefix matches.
    pub MatchesRegex { pattern: regex::Regex, source: String } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex").with_param("pattern", self.source.clone())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(&format!("^(?:{pattern})$"))?,
            source: pattern.to_owned(),
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// The pattern as it was supplied, without the added anchors.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
