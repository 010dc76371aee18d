//! Numeric bound validators over text input
//!
//! Both validators parse the text as an `f64`. They differ in how they
//! prepare the text first:
//!
//! - [`MinValue`] parses the raw text (`"12.5"`, `"-3"`, `"1e3"`).
//! - [`MaxValue`] strips every character that is not an ASCII digit before
//!   parsing, so currency-formatted input such as `"1.250 TL"` is read as
//!   `1250`. Signs and decimal separators are stripped as well.
//!
//! Text that does not parse fails validation in both cases.

use crate::foundation::ValidationError;

/// Keeps only the ASCII digits of `input`.
///
/// ```
/// use vcfield_validator::validators::numeric::digits_of;
///
/// assert_eq!(digits_of("₺1.250,00"), "125000");
/// assert_eq!(digits_of("abc"), "");
/// ```
#[must_use]
pub fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn bound_error(code: &'static str, relation: &str, bound: f64, text: &str) -> ValidationError {
    match parse_number(text) {
        Some(actual) => ValidationError::new(code, format!("Value must be {relation} {bound}"))
            .with_param("bound", bound.to_string())
            .with_param("actual", actual.to_string()),
        None => ValidationError::not_a_number(text),
    }
}

// ============================================================================
// MIN VALUE
// ============================================================================

crate::validator! {
    /// Validates that text parses to a number no smaller than `min`.
    #[derive(Copy, PartialEq)]
    pub MinValue { min: f64 } for str;
    rule(self, input) { parse_number(input).is_some_and(|value| value >= self.min) }
    error(self, input) { bound_error("min_value", "at least", self.min, input) }
    fn min_value(min: f64);
}

// ============================================================================
// MAX VALUE
// ============================================================================

crate::validator! {
    /// Validates that the digits of the text parse to a number no larger than `max`.
    #[derive(Copy, PartialEq)]
    pub MaxValue { max: f64 } for str;
    rule(self, input) { parse_number(&digits_of(input)).is_some_and(|value| value <= self.max) }
    error(self, input) { bound_error("max_value", "at most", self.max, &digits_of(input)) }
    fn max_value(max: f64);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("10", true)]
    #[case("10.0", true)]
    #[case("250.75", true)]
    #[case("9.99", false)]
    #[case("-10", false)]
    #[case("", false)]
    #[case("ten", false)]
    #[case("1,000", false)]
    fn test_min_value(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(min_value(10.0).validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("99", true)]
    #[case("100", true)]
    #[case("150", false)]
    #[case("abc", false)]
    #[case("", false)]
    // non-digits are stripped before parsing
    #[case("$ 99", true)]
    #[case("9.9", true)]
    #[case("1.50", false)]
    #[case("-150", false)]
    fn test_max_value(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(max_value(100.0).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_min_value_does_not_strip() {
        // "$ 99" would pass after stripping but MinValue parses the raw text.
        assert!(min_value(1.0).validate("$ 99").is_err());
        assert!(max_value(100.0).validate("$ 99").is_ok());
    }

    #[test]
    fn test_error_codes() {
        let err = max_value(100.0).validate("150").unwrap_err();
        assert_eq!(err.code, "max_value");
        assert_eq!(err.param("actual"), Some("150"));

        let err = min_value(1.0).validate("abc").unwrap_err();
        assert_eq!(err.code, "not_a_number");
        assert_eq!(err.param("input"), Some("abc"));
    }

    #[test]
    fn test_nan_is_not_a_number() {
        assert!(min_value(0.0).validate("NaN").is_err());
    }

    #[test]
    fn test_digits_of() {
        assert_eq!(digits_of("12-34 56"), "123456");
        assert_eq!(digits_of(""), "");
    }
}
