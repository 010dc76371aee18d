//! Phone number validator
//!
//! A field typically receives phone numbers as the user types them:
//! `0532 123 45 67`, `(0532) 123-4567`, `+90 532 123 45 67`. The default
//! [`Phone::lenient`] mode accepts these shapes and checks the digit count.

use crate::error::{RuleError, RuleResult};
use crate::foundation::{Validate, ValidationError};

/// How strictly the phone number format is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhoneMode {
    /// E.164: `+` followed by digits only.
    E164,
    /// Digits plus spaces, dashes, dots, balanced parentheses and a leading `+`.
    #[default]
    Lenient,
    /// Any characters; only the digit count is checked.
    DigitsOnly,
}

/// Validates phone numbers.
///
/// # Examples
///
/// ```
/// use vcfield_validator::validators::Phone;
/// use vcfield_validator::foundation::Validate;
///
/// let phone = Phone::lenient();
/// assert!(phone.validate("0532 123 45 67").is_ok());
/// assert!(phone.validate("+90 (532) 123-4567").is_ok());
/// assert!(phone.validate("123 45").is_err()); // too few digits
///
/// let strict = Phone::e164();
/// assert!(strict.validate("+905321234567").is_ok());
/// assert!(strict.validate("05321234567").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Phone {
    mode: PhoneMode,
    min_digits: u8,
    max_digits: u8,
}

impl Phone {
    /// Minimum digit count used by the constructors.
    pub const DEFAULT_MIN_DIGITS: u8 = 10;
    /// Maximum digit count used by the constructors (the E.164 limit).
    pub const DEFAULT_MAX_DIGITS: u8 = 15;

    /// Creates a validator for the given mode with the default digit bounds.
    #[must_use]
    pub fn new(mode: PhoneMode) -> Self {
        Self {
            mode,
            min_digits: Self::DEFAULT_MIN_DIGITS,
            max_digits: Self::DEFAULT_MAX_DIGITS,
        }
    }

    /// Strict E.164 format.
    #[must_use]
    pub fn e164() -> Self {
        Self::new(PhoneMode::E164)
    }

    /// Lenient format, the default.
    #[must_use]
    pub fn lenient() -> Self {
        Self::new(PhoneMode::Lenient)
    }

    /// Digit count only.
    #[must_use]
    pub fn digits_only() -> Self {
        Self::new(PhoneMode::DigitsOnly)
    }

    /// Sets the minimum number of digits required.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_digits(mut self, min: u8) -> Self {
        self.min_digits = min;
        self
    }

    /// Sets the maximum number of digits allowed.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_digits(mut self, max: u8) -> Self {
        self.max_digits = max;
        self
    }

    /// Sets both digit bounds, rejecting an inverted range.
    pub fn digit_range(self, min: u8, max: u8) -> RuleResult<Self> {
        if min > max {
            return Err(RuleError::InvalidDigitRange { min, max });
        }
        Ok(self.min_digits(min).max_digits(max))
    }

    /// The format mode.
    #[must_use]
    pub fn mode(&self) -> PhoneMode {
        self.mode
    }

    fn check_e164(input: &str) -> Result<usize, ValidationError> {
        let Some(number) = input.strip_prefix('+') else {
            return Err(ValidationError::new(
                "phone_missing_plus",
                "E.164 phone number must start with '+'",
            ));
        };

        if !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::new(
                "phone_invalid_chars",
                "E.164 phone number must contain only digits after '+'",
            ));
        }

        Ok(number.len())
    }

    fn check_lenient(input: &str) -> Result<usize, ValidationError> {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.');

        if !input.chars().all(allowed) {
            return Err(ValidationError::new(
                "phone_invalid_chars",
                "Phone number contains invalid characters",
            ));
        }

        if input.rfind('+').is_some_and(|pos| pos != 0) {
            return Err(ValidationError::new(
                "phone_plus_position",
                "'+' can only appear at the start of the phone number",
            ));
        }

        let mut depth = 0_i32;
        for c in input.chars() {
            match c {
                '(' => depth += 1,
                ')' => depth -= 1,
                _ => {}
            }
            if !(0..=1).contains(&depth) {
                break;
            }
        }
        if depth != 0 {
            return Err(ValidationError::new(
                "phone_unbalanced_parens",
                "Phone number has unbalanced parentheses",
            ));
        }

        Ok(count_digits(input))
    }

    fn check_digit_count(&self, count: usize) -> Result<(), ValidationError> {
        let (min, max) = (usize::from(self.min_digits), usize::from(self.max_digits));
        if count < min || count > max {
            return Err(ValidationError::new(
                "phone_digit_count",
                format!("Phone number must have between {min} and {max} digits"),
            )
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
            .with_param("actual", count.to_string()));
        }
        Ok(())
    }
}

fn count_digits(input: &str) -> usize {
    input.bytes().filter(u8::is_ascii_digit).count()
}

impl Default for Phone {
    fn default() -> Self {
        Self::lenient()
    }
}

impl Validate for Phone {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.is_empty() {
            return Err(ValidationError::new(
                "phone_empty",
                "Phone number cannot be empty",
            ));
        }

        let digits = match self.mode {
            PhoneMode::E164 => Self::check_e164(input)?,
            PhoneMode::Lenient => Self::check_lenient(input)?,
            PhoneMode::DigitsOnly => count_digits(input),
        };
        self.check_digit_count(digits)
    }
}

// ============================================================================
// TESTS
// ============================================================================
