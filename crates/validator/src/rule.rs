//! Validation rules: a format check paired with the message a field shows
//! when the check fails.
//!
//! Rules are immutable once built. Each [`Rule`] variant is one rule kind;
//! [`ValidationRule::check`] matches them exhaustively and decides how an
//! absent value is treated:
//!
//! | kind               | absent value      |
//! |--------------------|-------------------|
//! | `TrimRequired`     | checked as `""`   |
//! | `CustomFunction`   | ignored           |
//! | every other kind   | fails             |

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::error::{RuleError, RuleResult};
use crate::foundation::{Validate, ValidationError};
use crate::validators::{
    CreditCard, MatchesRegex, MaxValue, MinLength, MinValue, Phone, Plate, TransactionDay, digits,
    not_blank, not_empty,
};

// ============================================================================
// RULE KIND
// ============================================================================

/// The tag of a rule, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleKind {
    Required,
    TrimRequired,
    MinimumLength,
    MinimumValue,
    MaximumValue,
    CreditCardNumber,
    PhoneNumber,
    OnlyNumbers,
    TransactionDay,
    Regex,
    CustomFunction,
    PlateFormat,
}

impl RuleKind {
    /// Snake-case name, as used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TrimRequired => "trim_required",
            Self::MinimumLength => "minimum_length",
            Self::MinimumValue => "minimum_value",
            Self::MaximumValue => "maximum_value",
            Self::CreditCardNumber => "credit_card_number",
            Self::PhoneNumber => "phone_number",
            Self::OnlyNumbers => "only_numbers",
            Self::TransactionDay => "transaction_day",
            Self::Regex => "regex",
            Self::CustomFunction => "custom_function",
            Self::PlateFormat => "plate_format",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// PREDICATE
// ============================================================================

/// A zero-argument condition supplied by the caller.
///
/// The closure may read any state it captures, for example whether a
/// companion checkbox is ticked. Fields are driven from a single UI thread,
/// so the closure does not have to be `Send`.
#[derive(Clone)]
pub struct Predicate(Rc<dyn Fn() -> bool>);

impl Predicate {
    /// Wraps a closure.
    pub fn new(f: impl Fn() -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Runs the condition.
    #[must_use]
    pub fn holds(&self) -> bool {
        (self.0)()
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

// ============================================================================
// RULE
// ============================================================================

/// One rule kind together with its parameters.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Fails on an absent or empty value.
    Required,
    /// Fails when the value is empty after trimming whitespace.
    TrimRequired,
    /// Fails when the value has fewer characters than the threshold.
    MinimumLength(MinLength),
    /// Fails when the raw value does not parse or is below the bound.
    MinimumValue(MinValue),
    /// Fails when the value's digits do not parse or exceed the bound.
    MaximumValue(MaxValue),
    /// Fails on anything but a Luhn-valid card number.
    CreditCardNumber(CreditCard),
    /// Fails on anything but a phone number in the configured mode.
    PhoneNumber(Phone),
    /// Fails unless the value is a non-empty run of ASCII digits.
    OnlyNumbers,
    /// Fails unless the value is a day within the configured range.
    TransactionDay(TransactionDay),
    /// Fails unless the whole value matches the pattern.
    Regex(MatchesRegex),
    /// Fails when the predicate returns `false`. Ignores the value.
    CustomFunction(Predicate),
    /// Fails unless the value is a vehicle licence plate.
    PlateFormat(Plate),
}

impl Rule {
    /// The tag of this rule.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Required => RuleKind::Required,
            Self::TrimRequired => RuleKind::TrimRequired,
            Self::MinimumLength(_) => RuleKind::MinimumLength,
            Self::MinimumValue(_) => RuleKind::MinimumValue,
            Self::MaximumValue(_) => RuleKind::MaximumValue,
            Self::CreditCardNumber(_) => RuleKind::CreditCardNumber,
            Self::PhoneNumber(_) => RuleKind::PhoneNumber,
            Self::OnlyNumbers => RuleKind::OnlyNumbers,
            Self::TransactionDay(_) => RuleKind::TransactionDay,
            Self::Regex(_) => RuleKind::Regex,
            Self::CustomFunction(_) => RuleKind::CustomFunction,
            Self::PlateFormat(_) => RuleKind::PlateFormat,
        }
    }
}

fn present(value: Option<&str>) -> Result<&str, ValidationError> {
    value.ok_or_else(ValidationError::required)
}

// ============================================================================
// VALIDATION RULE
// ============================================================================

/// A [`Rule`] and the message shown when it fails.
///
/// # Examples
///
/// ```
/// use vcfield_validator::rule::ValidationRule;
///
/// let rule = ValidationRule::minimum_length(3, "At least 3 characters");
/// assert!(rule.check(Some("abc")).is_ok());
/// assert!(rule.check(Some("ab")).is_err());
/// assert!(rule.check(None).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationRule {
    rule: Rule,
    message: Cow<'static, str>,
}

impl ValidationRule {
    /// Pairs a rule with its message.
    pub fn new(rule: Rule, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }

    /// Value must be present and non-empty.
    pub fn required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::Required, message)
    }

    /// Value must contain something other than whitespace.
    pub fn trim_required(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::TrimRequired, message)
    }

    /// Value must have at least `min` characters.
    pub fn minimum_length(min: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::MinimumLength(MinLength::new(min)), message)
    }

    /// Value must parse as a number no smaller than `min`.
    pub fn minimum_value(min: f64, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::MinimumValue(MinValue::new(min)), message)
    }

    /// Value's digits must parse as a number no larger than `max`.
    pub fn maximum_value(max: f64, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::MaximumValue(MaxValue::new(max)), message)
    }

    /// Value must be a valid payment card number.
    pub fn credit_card_number(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::CreditCardNumber(CreditCard::new()), message)
    }

    /// Value must be a phone number in lenient format.
    pub fn phone_number(message: impl Into<Cow<'static, str>>) -> Self {
        Self::phone_number_with(Phone::lenient(), message)
    }

    /// Value must be a phone number accepted by `phone`.
    pub fn phone_number_with(phone: Phone, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::PhoneNumber(phone), message)
    }

    /// Value must consist of ASCII digits only.
    pub fn only_numbers(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::OnlyNumbers, message)
    }

    /// Value must be a day of the month, 1 to 31.
    pub fn transaction_day(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::TransactionDay(TransactionDay::default()), message)
    }

    /// Value must be a day of the month between `first` and `last`.
    pub fn transaction_day_between(
        first: u8,
        last: u8,
        message: impl Into<Cow<'static, str>>,
    ) -> RuleResult<Self> {
        Ok(Self::new(
            Rule::TransactionDay(TransactionDay::new(first, last)?),
            message,
        ))
    }

    /// Value must fully match `pattern`.
    pub fn regex(pattern: &str, message: impl Into<Cow<'static, str>>) -> RuleResult<Self> {
        let validator = MatchesRegex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self::new(Rule::Regex(validator), message))
    }

    /// `condition` must return `true`.
    pub fn custom(
        condition: impl Fn() -> bool + 'static,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(Rule::CustomFunction(Predicate::new(condition)), message)
    }

    /// Value must be a vehicle licence plate.
    pub fn plate_format(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Rule::PlateFormat(Plate), message)
    }

    /// The rule kind.
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        self.rule.kind()
    }

    /// The rule with its parameters.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The user-facing failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn message_cow(&self) -> &Cow<'static, str> {
        &self.message
    }

    /// Checks `value` against this rule.
    ///
    /// The error describes the technical reason; the user-facing text is
    /// [`message`](Self::message).
    pub fn check(&self, value: Option<&str>) -> Result<(), ValidationError> {
        match &self.rule {
            Rule::Required => not_empty().validate(present(value)?),
            Rule::TrimRequired => not_blank().validate(value.unwrap_or_default()),
            Rule::MinimumLength(v) => v.validate(present(value)?),
            Rule::MinimumValue(v) => v.validate(present(value)?),
            Rule::MaximumValue(v) => v.validate(present(value)?),
            Rule::CreditCardNumber(v) => v.validate(present(value)?),
            Rule::PhoneNumber(v) => v.validate(present(value)?),
            Rule::OnlyNumbers => digits().validate(present(value)?),
            Rule::TransactionDay(v) => v.validate(present(value)?),
            Rule::Regex(v) => v.validate(present(value)?),
            Rule::PlateFormat(v) => v.validate(present(value)?),
            Rule::CustomFunction(p) => {
                if p.holds() {
                    Ok(())
                } else {
                    Err(ValidationError::new("custom", "Custom condition failed"))
                }
            }
        }
    }

    /// Returns `true` when [`check`](Self::check) succeeds.
    pub fn passes(&self, value: Option<&str>) -> bool {
        self.check(value).is_ok()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_required() {
        let rule = ValidationRule::required("required");
        assert!(!rule.passes(None));
        assert!(!rule.passes(Some("")));
        assert!(rule.passes(Some(" ")));
        assert!(rule.passes(Some("a")));
    }

    #[test]
    fn test_trim_required_treats_absent_as_empty() {
        let rule = ValidationRule::trim_required("blank");
        assert_eq!(rule.check(None).unwrap_err().code, "not_blank");
        assert!(!rule.passes(Some("   ")));
        assert!(rule.passes(Some(" a ")));
    }

    #[test]
    fn test_absent_value_fails_value_rules() {
        let rules = [
            ValidationRule::minimum_length(0, "m"),
            ValidationRule::minimum_value(0.0, "m"),
            ValidationRule::maximum_value(100.0, "m"),
            ValidationRule::credit_card_number("m"),
            ValidationRule::phone_number("m"),
            ValidationRule::only_numbers("m"),
            ValidationRule::transaction_day("m"),
            ValidationRule::regex(".*", "m").unwrap(),
            ValidationRule::plate_format("m"),
        ];
        for rule in &rules {
            let err = rule.check(None).unwrap_err();
            assert_eq!(err.code, "required", "{}", rule.kind());
        }
    }

    #[test]
    fn test_minimum_length_zero_accepts_empty_but_not_absent() {
        let rule = ValidationRule::minimum_length(0, "m");
        assert!(rule.passes(Some("")));
        assert!(!rule.passes(None));
    }

    #[test]
    fn test_custom_function_ignores_value() {
        let flag = Rc::new(Cell::new(false));
        let rule = ValidationRule::custom(
            {
                let flag = Rc::clone(&flag);
                move || flag.get()
            },
            "accept the terms",
        );

        assert!(!rule.passes(Some("anything")));
        assert!(!rule.passes(None));

        flag.set(true);
        assert!(rule.passes(None));
        assert!(rule.passes(Some("")));
    }

    #[test]
    fn test_regex_invalid_pattern() {
        let err = ValidationRule::regex("[a-", "m").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "[a-"));
    }

    #[test]
    fn test_transaction_day_between() {
        let rule = ValidationRule::transaction_day_between(1, 28, "m").unwrap();
        assert!(rule.passes(Some("28")));
        assert!(!rule.passes(Some("29")));
        assert!(ValidationRule::transaction_day_between(5, 1, "m").is_err());
    }

    #[test]
    fn test_kind_and_message() {
        let rule = ValidationRule::plate_format("Invalid plate");
        assert_eq!(rule.kind(), RuleKind::PlateFormat);
        assert_eq!(rule.message(), "Invalid plate");
        assert!(matches!(rule.rule(), Rule::PlateFormat(_)));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(RuleKind::CreditCardNumber.to_string(), "credit_card_number");
        assert_eq!(RuleKind::TrimRequired.as_str(), "trim_required");
    }

    #[test]
    fn test_predicate_debug() {
        let predicate = Predicate::new(|| true);
        assert_eq!(format!("{predicate:?}"), "Predicate(..)");
    }
}
