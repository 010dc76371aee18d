//! The field state machine
//!
//! ```text
//!              begin_editing / clear_validation / set_rules
//!        ┌──────────────────────────────────────────────────┐
//!        ▼                                                  │
//!   Unevaluated ── text_changed / end_editing / validate ──► Valid | Invalid(msg)
//! ```
//!
//! Hook order per event:
//!
//! | event           | order                                                  |
//! |-----------------|--------------------------------------------------------|
//! | `text_changed`  | validity, text-changed                                 |
//! | `begin_editing` | error display (`Hide`), begin-editing                  |
//! | `end_editing`   | validity, error display (`Show`/`Hide`), end-editing   |
//! | `validate`      | validity, then error display when `for_continue`       |

use vcfield_validator::chain::ValidatorChain;

use crate::event::{ErrorDisplay, Hooks};
use crate::input::{InputPolicy, Mask};
use crate::state::{FieldState, Validity};

/// Validation state of one text-input field.
#[derive(Debug, Default)]
pub struct FieldController {
    rules: ValidatorChain,
    state: FieldState,
    display: ErrorDisplay,
    placeholder: Option<String>,
    policy: InputPolicy,
    mask: Option<Mask>,
    hooks: Hooks,
}

impl FieldController {
    /// A field checked by `rules`, with no text and no hooks.
    #[must_use]
    pub fn new(rules: ValidatorChain) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    // ------------------------------------------------------------------------
    // Hook registration. A later registration replaces the earlier one.
    // ------------------------------------------------------------------------

    /// Called with the new text after every `text_changed`.
    pub fn on_text_changed(&mut self, hook: impl FnMut(Option<&str>) + 'static) -> &mut Self {
        self.hooks.text_changed = Some(Box::new(hook));
        self
    }

    /// Called with the event's text after every `begin_editing`.
    pub fn on_begin_editing(&mut self, hook: impl FnMut(Option<&str>) + 'static) -> &mut Self {
        self.hooks.begin_editing = Some(Box::new(hook));
        self
    }

    /// Called with the event's text after every `end_editing`.
    pub fn on_end_editing(&mut self, hook: impl FnMut(Option<&str>) + 'static) -> &mut Self {
        self.hooks.end_editing = Some(Box::new(hook));
        self
    }

    /// Called after every evaluation, whether or not the outcome changed.
    pub fn on_validity_changed(&mut self, hook: impl FnMut(bool) + 'static) -> &mut Self {
        self.hooks.validity_changed = Some(Box::new(hook));
        self
    }

    /// Called whenever the error label should be shown or hidden.
    pub fn on_error_display(&mut self, hook: impl FnMut(&ErrorDisplay) + 'static) -> &mut Self {
        self.hooks.error_display = Some(Box::new(hook));
        self
    }

    // ------------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------------

    /// The user edited the text.
    pub fn text_changed(&mut self, value: Option<&str>) {
        tracing::trace!(present = value.is_some(), "field text changed");
        self.state.text = value.map(str::to_owned);
        self.evaluate();
        self.hooks.text_changed(value);
    }

    /// The field gained focus.
    ///
    /// Validity resets and any visible error is hidden. The stored text is
    /// left alone.
    pub fn begin_editing(&mut self, value: Option<&str>) {
        tracing::trace!("field began editing");
        self.reset();
        self.hooks.begin_editing(value);
    }

    /// The field lost focus.
    pub fn end_editing(&mut self, value: Option<&str>) {
        tracing::trace!(present = value.is_some(), "field ended editing");
        self.state.text = value.map(str::to_owned);
        self.evaluate();
        self.signal_outcome();
        self.hooks.end_editing(value);
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    /// Back to `Unevaluated` with the error hidden, whatever the text.
    pub fn clear_validation(&mut self) {
        self.reset();
    }

    /// Clears validation when `clear` is `true`; does nothing otherwise.
    pub fn set_clear_validation(&mut self, clear: bool) {
        if clear {
            self.clear_validation();
        }
    }

    /// Evaluates the current text.
    ///
    /// With `for_continue` the error label is also updated, as a submit
    /// action would want. Returns the resulting tri-state validity.
    pub fn validate(&mut self, for_continue: bool) -> Option<bool> {
        self.evaluate();
        if for_continue {
            self.signal_outcome();
        }
        self.state.is_valid()
    }

    /// Replaces the stored text without evaluating or calling any hook.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.text = Some(text.into());
    }

    /// Replaces the rule chain. Validity returns to `Unevaluated`.
    pub fn set_rules(&mut self, rules: ValidatorChain) {
        self.rules = rules;
        self.set_validity(Validity::Unevaluated);
    }

    // ------------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.state.text()
    }

    #[must_use]
    pub const fn state(&self) -> &FieldState {
        &self.state
    }

    /// `None` while unevaluated.
    #[must_use]
    pub const fn is_valid(&self) -> Option<bool> {
        self.state.is_valid()
    }

    /// Message of the failing rule; `None` unless invalid.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    /// The last error-display signal sent.
    #[must_use]
    pub const fn error_display(&self) -> &ErrorDisplay {
        &self.display
    }

    #[must_use]
    pub const fn rules(&self) -> &ValidatorChain {
        &self.rules
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    #[must_use]
    pub const fn policy(&self) -> &InputPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Whether the presentation layer should accept an edit producing
    /// `candidate`.
    ///
    /// With a mask, the literals must sit where the mask puts them and the
    /// slot characters are checked against the policy.
    #[must_use]
    pub fn admits(&self, candidate: &str) -> bool {
        match &self.mask {
            Some(mask) => mask
                .unmask(candidate)
                .is_some_and(|entered| self.policy.admits(&entered)),
            None => self.policy.admits(candidate),
        }
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn evaluate(&mut self) {
        let validity = Validity::from(self.rules.evaluate(self.state.text()));
        let valid = validity.is_valid().unwrap_or_default();
        self.set_validity(validity);
        self.hooks.validity_changed(valid);
    }

    fn reset(&mut self) {
        self.set_validity(Validity::Unevaluated);
        self.signal(ErrorDisplay::Hide);
    }

    fn signal_outcome(&mut self) {
        let display = match self.state.error_message() {
            Some(message) => ErrorDisplay::Show(message.to_owned()),
            None => ErrorDisplay::Hide,
        };
        self.signal(display);
    }

    fn set_validity(&mut self, validity: Validity) {
        if self.state.validity != validity {
            tracing::debug!(
                from = ?self.state.validity,
                to = ?validity,
                "field validity changed"
            );
        }
        self.state.validity = validity;
    }

    fn signal(&mut self, display: ErrorDisplay) {
        self.hooks.error_display(&display);
        self.display = display;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use vcfield_validator::rule::ValidationRule;

    fn amount_field() -> FieldController {
        FieldController::new(
            ValidatorChain::new()
                .rule(ValidationRule::required("Enter an amount"))
                .rule(ValidationRule::maximum_value(100.0, "At most 100")),
        )
    }

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(T) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let log = Rc::clone(&log);
            move |item| log.borrow_mut().push(item)
        };
        (log, sink)
    }

    #[test]
    fn test_starts_unevaluated() {
        let field = amount_field();
        assert_eq!(field.text(), None);
        assert_eq!(field.is_valid(), None);
        assert_eq!(field.error_message(), None);
        assert_eq!(field.error_display(), &ErrorDisplay::Hide);
    }

    #[test]
    fn test_text_changed_evaluates_without_display() {
        let (shown, mut sink) = recorder::<ErrorDisplay>();
        let mut field = amount_field();
        field.on_error_display(move |d: &ErrorDisplay| sink(d.clone()));

        field.text_changed(Some("150"));
        assert_eq!(field.text(), Some("150"));
        assert_eq!(field.is_valid(), Some(false));
        assert_eq!(field.error_message(), Some("At most 100"));
        assert!(shown.borrow().is_empty());
    }

    #[test]
    fn test_end_editing_shows_then_hides() {
        let (shown, mut sink) = recorder::<ErrorDisplay>();
        let mut field = amount_field();
        field.on_error_display(move |d: &ErrorDisplay| sink(d.clone()));

        field.end_editing(Some(""));
        field.end_editing(Some("42"));
        assert_eq!(
            *shown.borrow(),
            vec![ErrorDisplay::Show("Enter an amount".to_owned()), ErrorDisplay::Hide]
        );
        assert_eq!(field.error_display(), &ErrorDisplay::Hide);
    }

    #[test]
    fn test_begin_editing_keeps_text() {
        let mut field = amount_field();
        field.text_changed(Some("150"));
        field.begin_editing(Some("150"));
        assert_eq!(field.text(), Some("150"));
        assert_eq!(field.is_valid(), None);
        assert_eq!(field.error_message(), None);
    }

    #[test]
    fn test_validate_reports_tri_state() {
        let mut field = amount_field();
        assert_eq!(field.validate(false), Some(false));
        assert_eq!(field.error_message(), Some("Enter an amount"));
        assert_eq!(field.error_display(), &ErrorDisplay::Hide);

        field.set_text("7");
        assert_eq!(field.is_valid(), Some(false));
        assert_eq!(field.validate(true), Some(true));
    }

    #[test]
    fn test_validate_for_continue_shows_error() {
        let mut field = amount_field();
        field.set_text("500");
        assert_eq!(field.validate(true), Some(false));
        assert_eq!(
            field.error_display(),
            &ErrorDisplay::Show("At most 100".to_owned())
        );
    }

    #[test]
    fn test_validity_hook_fires_on_every_evaluation() {
        let (seen, sink) = recorder::<bool>();
        let mut field = amount_field();
        field.on_validity_changed(sink);

        field.text_changed(Some("1"));
        field.text_changed(Some("2"));
        field.validate(false);
        field.begin_editing(Some("2"));
        assert_eq!(*seen.borrow(), vec![true, true, true]);
    }

    #[test]
    fn test_set_clear_validation() {
        let mut field = amount_field();
        field.end_editing(None);
        assert_eq!(field.is_valid(), Some(false));

        field.set_clear_validation(false);
        assert_eq!(field.is_valid(), Some(false));

        field.set_clear_validation(true);
        assert_eq!(field.is_valid(), None);
        assert_eq!(field.error_display(), &ErrorDisplay::Hide);
    }

    #[test]
    fn test_set_rules_resets_validity() {
        let mut field = amount_field();
        field.text_changed(Some("abc"));
        assert_eq!(field.is_valid(), Some(false));

        field.set_rules(ValidatorChain::new());
        assert_eq!(field.is_valid(), None);
        assert_eq!(field.validate(false), Some(true));
    }

    #[test]
    fn test_admits_unmasks_candidate() {
        let field = FieldController::default()
            .with_policy(InputPolicy::new().max_length(4).allow(crate::CharacterClass::Digits))
            .with_mask(Mask::new("## ##").unwrap());
        assert!(field.admits("12 34"));
        assert!(!field.admits("12 345"));

        let plain = FieldController::default().with_policy(InputPolicy::new().max_length(2));
        assert!(plain.admits("ab"));
        assert!(!plain.admits("abc"));
    }

    #[test]
    fn test_masked_digits_field_rejects_letters() {
        let field = FieldController::default()
            .with_policy(InputPolicy::new().allow(crate::CharacterClass::Digits))
            .with_mask(Mask::new("(###) ###").unwrap());

        assert!(field.admits("(532) 1"));
        assert!(field.admits(""));
        assert!(!field.admits("(5a2) 1"));
        assert!(!field.admits("abc"));
        assert!(!field.admits("532"));
    }

    #[test]
    fn test_placeholder() {
        let field = FieldController::default().with_placeholder("Amount");
        assert_eq!(field.placeholder(), Some("Amount"));
        assert_eq!(FieldController::default().placeholder(), None);
    }
}
