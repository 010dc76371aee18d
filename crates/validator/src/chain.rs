//! Ordered, short-circuiting evaluation of validation rules.
//!
//! Rules run in the order given. The first rule that fails decides the
//! outcome and no later rule is evaluated. An empty chain accepts every
//! value, including an absent one.
//!
//! # Examples
//!
//! ```
//! use vcfield_validator::chain::{Evaluation, ValidatorChain};
//! use vcfield_validator::rule::ValidationRule;
//!
//! let chain = ValidatorChain::new()
//!     .rule(ValidationRule::required("Required"))
//!     .rule(ValidationRule::minimum_length(3, "Too short"));
//!
//! assert_eq!(chain.evaluate(Some("")), Evaluation::invalid("Required"));
//! assert_eq!(chain.evaluate(Some("ab")), Evaluation::invalid("Too short"));
//! assert_eq!(chain.evaluate(Some("abc")), Evaluation::valid());
//! ```

use std::borrow::Cow;

use crate::foundation::ValidationError;
use crate::rule::{RuleKind, ValidationRule};

// ============================================================================
// EVALUATION
// ============================================================================

/// The outcome of running a chain: validity plus the message to display.
///
/// `message` is `Some` exactly when `valid` is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation {
    /// Whether every rule passed.
    pub valid: bool,
    /// Message of the first failing rule.
    pub message: Option<String>,
}

impl Evaluation {
    /// All rules passed.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    /// A rule failed with `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }

    /// Splits into the `(valid, message)` pair.
    #[must_use]
    pub fn into_parts(self) -> (bool, Option<String>) {
        (self.valid, self.message)
    }
}

impl From<Result<(), RuleViolation>> for Evaluation {
    fn from(result: Result<(), RuleViolation>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(violation) => Self::invalid(violation.message),
        }
    }
}

// ============================================================================
// RULE VIOLATION
// ============================================================================

/// Which rule failed and why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rule #{index} ({kind}) failed: {message}")]
pub struct RuleViolation {
    /// Position of the rule in the chain.
    pub index: usize,
    /// Kind of the failing rule.
    pub kind: RuleKind,
    /// The rule's user-facing message.
    pub message: Cow<'static, str>,
    /// The technical reason reported by the validator.
    #[source]
    pub source: ValidationError,
}

// ============================================================================
// FREE FUNCTIONS
// ============================================================================

/// Finds the first rule in `rules` that rejects `value`.
pub fn check(rules: &[ValidationRule], value: Option<&str>) -> Result<(), RuleViolation> {
    tracing::trace!(
        rules = rules.len(),
        present = value.is_some(),
        "evaluating validator chain"
    );

    for (index, rule) in rules.iter().enumerate() {
        if let Err(source) = rule.check(value) {
            tracing::debug!(
                index,
                kind = %rule.kind(),
                code = %source.code,
                "validation rule failed"
            );
            return Err(RuleViolation {
                index,
                kind: rule.kind(),
                message: rule.message_cow().clone(),
                source,
            });
        }
    }

    Ok(())
}

/// Evaluates `rules` against `value`.
///
/// Returns the message of the first failing rule, or a valid outcome when
/// every rule passes (including when `rules` is empty).
#[must_use]
pub fn evaluate(rules: &[ValidationRule], value: Option<&str>) -> Evaluation {
    check(rules, value).into()
}

// ============================================================================
// VALIDATOR CHAIN
// ============================================================================

/// An owned, ordered list of rules.
#[derive(Debug, Clone, Default)]
pub struct ValidatorChain {
    rules: Vec<ValidationRule>,
}

impl ValidatorChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    /// The rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[ValidationRule] {
        &self.rules
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` when the chain has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Finds the first rule that rejects `value`.
    pub fn check(&self, value: Option<&str>) -> Result<(), RuleViolation> {
        check(&self.rules, value)
    }

    /// Evaluates the chain against `value`.
    #[must_use]
    pub fn evaluate(&self, value: Option<&str>) -> Evaluation {
        evaluate(&self.rules, value)
    }
}

impl From<Vec<ValidationRule>> for ValidatorChain {
    fn from(rules: Vec<ValidationRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<ValidationRule> for ValidatorChain {
    fn from_iter<I: IntoIterator<Item = ValidationRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationRule> for ValidatorChain {
    fn extend<I: IntoIterator<Item = ValidationRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ValidatorChain {
    type Item = &'a ValidationRule;
    type IntoIter = std::slice::Iter<'a, ValidationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_empty_chain_is_valid() {
        assert_eq!(evaluate(&[], None), Evaluation::valid());
        assert_eq!(evaluate(&[], Some("")), Evaluation::valid());
        assert!(ValidatorChain::new().is_empty());
    }

    #[test]
    fn test_required() {
        let rules = [ValidationRule::required("msg")];
        assert_eq!(evaluate(&rules, None), Evaluation::invalid("msg"));
        assert_eq!(evaluate(&rules, Some("")), Evaluation::invalid("msg"));
        assert_eq!(evaluate(&rules, Some("a")), Evaluation::valid());
    }

    #[test]
    fn test_minimum_length() {
        let rules = [ValidationRule::minimum_length(3, "msg")];
        assert_eq!(evaluate(&rules, Some("ab")), Evaluation::invalid("msg"));
        assert_eq!(evaluate(&rules, Some("abc")), Evaluation::valid());
    }

    #[test]
    fn test_maximum_value() {
        let rules = [ValidationRule::maximum_value(100.0, "msg")];
        assert_eq!(evaluate(&rules, Some("150")), Evaluation::invalid("msg"));
        assert_eq!(evaluate(&rules, Some("99")), Evaluation::valid());
        assert_eq!(evaluate(&rules, Some("abc")), Evaluation::invalid("msg"));
    }

    #[test]
    fn test_short_circuit_reports_first_failure() {
        let rules = [
            ValidationRule::required("m1"),
            ValidationRule::minimum_length(3, "m2"),
        ];
        assert_eq!(evaluate(&rules, Some("")), Evaluation::invalid("m1"));
        assert_eq!(evaluate(&rules, Some("ab")), Evaluation::invalid("m2"));
    }

    #[test]
    fn test_short_circuit_skips_later_rules() {
        let calls = Rc::new(Cell::new(0_u32));
        let counting = {
            let calls = Rc::clone(&calls);
            move || {
                calls.set(calls.get() + 1);
                true
            }
        };
        let chain = ValidatorChain::new()
            .rule(ValidationRule::required("m1"))
            .rule(ValidationRule::custom(counting, "m2"));

        assert!(!chain.evaluate(None).valid);
        assert_eq!(calls.get(), 0);

        assert!(chain.evaluate(Some("x")).valid);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_check_reports_violation_details() {
        let chain: ValidatorChain = vec![
            ValidationRule::only_numbers("Digits only"),
            ValidationRule::transaction_day("Pick a day"),
        ]
        .into();

        let violation = chain.check(Some("45")).unwrap_err();
        assert_eq!(violation.index, 1);
        assert_eq!(violation.kind, RuleKind::TransactionDay);
        assert_eq!(violation.message, "Pick a day");
        assert_eq!(violation.source.code, "out_of_range");
        assert_eq!(
            violation.to_string(),
            "rule #1 (transaction_day) failed: Pick a day"
        );
    }

    #[test]
    fn test_evaluation_into_parts() {
        assert_eq!(Evaluation::valid().into_parts(), (true, None));
        assert_eq!(
            Evaluation::invalid("x").into_parts(),
            (false, Some("x".to_owned()))
        );
    }

    #[test]
    fn test_chain_collection_impls() {
        let mut chain: ValidatorChain = [ValidationRule::required("a")].into_iter().collect();
        chain.push(ValidationRule::trim_required("b"));
        chain.extend([ValidationRule::plate_format("c")]);

        let kinds: Vec<_> = (&chain).into_iter().map(ValidationRule::kind).collect();
        assert_eq!(
            kinds,
            vec![RuleKind::Required, RuleKind::TrimRequired, RuleKind::PlateFormat]
        );
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.rules()[2].message(), "c");
    }
}
