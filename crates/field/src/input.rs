//! Keystroke filtering and input masks
//!
//! Both are advisory: the presentation layer asks [`InputPolicy::admits`]
//! before accepting an edit and uses [`Mask`] to format what it displays.
//! Neither affects validation.

use serde::{Deserialize, Serialize};
use vcfield_validator::foundation::Validate;
use vcfield_validator::validators::{Alphanumeric, Digits, MaxLength};

// ============================================================================
// CHARACTER CLASS
// ============================================================================

/// Characters a field accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Anything.
    Any,
    /// Letters and numbers, including non-ASCII letters.
    #[default]
    Alphanumeric,
    /// ASCII digits.
    Digits,
    /// Exactly the characters listed.
    Custom(String),
}

impl CharacterClass {
    /// Returns `true` when every character of `text` belongs to the class.
    /// The empty string always belongs.
    #[must_use]
    pub fn admits(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        match self {
            Self::Any => true,
            Self::Alphanumeric => Alphanumeric.is_valid(text),
            Self::Digits => Digits.is_valid(text),
            Self::Custom(set) => text.chars().all(|c| set.contains(c)),
        }
    }
}

// ============================================================================
// INPUT POLICY
// ============================================================================

/// Maximum length plus allowed characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPolicy {
    max_length: Option<MaxLength>,
    allowed: CharacterClass,
}

impl InputPolicy {
    /// Unlimited length, alphanumeric characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts any text.
    #[must_use]
    pub fn unrestricted() -> Self {
        Self::new().allow(CharacterClass::Any)
    }

    /// Caps the length in characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(MaxLength::new(max));
        self
    }

    /// Replaces the allowed character class.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow(mut self, allowed: CharacterClass) -> Self {
        self.allowed = allowed;
        self
    }

    #[must_use]
    pub fn max_length_limit(&self) -> Option<usize> {
        self.max_length.map(|limit| limit.max)
    }

    #[must_use]
    pub const fn allowed(&self) -> &CharacterClass {
        &self.allowed
    }

    /// Whether `candidate`, the unmasked text the field would hold after an
    /// edit, is acceptable.
    #[must_use]
    pub fn admits(&self, candidate: &str) -> bool {
        let fits = self
            .max_length
            .is_none_or(|limit| limit.is_valid(candidate));
        fits && self.allowed.admits(candidate)
    }
}

// ============================================================================
// MASK
// ============================================================================

/// A mask was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MaskError {
    #[error("mask `{0}` has no `#` digit slot")]
    NoSlots(String),
}

/// Display format for digit input, e.g. `(###) ### ## ##`.
///
/// `#` is a digit slot; every other character is a literal.
///
/// ```
/// use vcfield_field::Mask;
///
/// let mask = Mask::new("(###) ### ## ##").unwrap();
/// assert_eq!(mask.apply("5321234567"), "(532) 123 45 67");
/// assert_eq!(mask.apply("53212"), "(532) 12");
/// assert_eq!(mask.strip("(532) 12"), "53212");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    pattern: String,
}

impl Mask {
    pub const SLOT: char = '#';

    pub fn new(pattern: impl Into<String>) -> Result<Self, MaskError> {
        let pattern = pattern.into();
        if !pattern.contains(Self::SLOT) {
            return Err(MaskError::NoSlots(pattern));
        }
        Ok(Self { pattern })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of digit slots.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.pattern.chars().filter(|&c| c == Self::SLOT).count()
    }

    /// Formats the digits of `raw` into the mask.
    ///
    /// Non-digits in `raw` are ignored. Output stops when either the digits
    /// or the slots run out, so no trailing literal follows the last digit.
    #[must_use]
    pub fn apply(&self, raw: &str) -> String {
        let mut digits = raw.chars().filter(char::is_ascii_digit).peekable();
        let mut out = String::with_capacity(self.pattern.len());

        for slot in self.pattern.chars() {
            if digits.peek().is_none() {
                break;
            }
            if slot == Self::SLOT {
                out.extend(digits.next());
            } else {
                out.push(slot);
            }
        }

        out
    }

    /// Splits typed text back into what the user entered in the slots.
    ///
    /// Every character under a slot is kept, whatever it is, as is anything
    /// typed past the end of the mask. Returns `None` when a literal
    /// position holds a different character.
    ///
    /// ```
    /// use vcfield_field::Mask;
    ///
    /// let mask = Mask::new("(###) ###").unwrap();
    /// assert_eq!(mask.unmask("(5a2) 1").as_deref(), Some("5a21"));
    /// assert_eq!(mask.unmask("abc"), None);
    /// ```
    #[must_use]
    pub fn unmask(&self, masked: &str) -> Option<String> {
        let slots = self.pattern.chars().chain(std::iter::repeat(Self::SLOT));
        let mut out = String::with_capacity(masked.len());
        for (c, slot) in masked.chars().zip(slots) {
            if slot == Self::SLOT {
                out.push(c);
            } else if c != slot {
                return None;
            }
        }
        Some(out)
    }

    /// Recovers the digits from text produced by [`apply`](Self::apply).
    ///
    /// Only digits sitting under a slot are kept, so digits that are part of
    /// the mask's literals (a `+90` prefix) are dropped. Digits typed past
    /// the end of the mask are kept.
    #[must_use]
    pub fn strip(&self, masked: &str) -> String {
        let slots = self.pattern.chars().chain(std::iter::repeat(Self::SLOT));
        masked
            .chars()
            .zip(slots)
            .filter(|&(c, slot)| slot == Self::SLOT && c.is_ascii_digit())
            .map(|(c, _)| c)
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(CharacterClass::Any, "a b-c!", true)]
    #[case(CharacterClass::Alphanumeric, "abc123", true)]
    #[case(CharacterClass::Alphanumeric, "çağ", true)]
    #[case(CharacterClass::Alphanumeric, "ab c", false)]
    #[case(CharacterClass::Digits, "0123", true)]
    #[case(CharacterClass::Digits, "12a", false)]
    #[case(CharacterClass::Custom("ABC ".into()), "CAB A", true)]
    #[case(CharacterClass::Custom("ABC".into()), "ABD", false)]
    fn test_character_class(#[case] class: CharacterClass, #[case] text: &str, #[case] ok: bool) {
        assert_eq!(class.admits(text), ok, "{class:?} {text:?}");
    }

    #[rstest]
    #[case(CharacterClass::Digits)]
    #[case(CharacterClass::Custom(String::new()))]
    fn test_empty_text_is_always_admitted(#[case] class: CharacterClass) {
        assert!(class.admits(""));
    }

    #[test]
    fn test_policy_defaults() {
        let policy = InputPolicy::new();
        assert_eq!(policy.max_length_limit(), None);
        assert_eq!(policy.allowed(), &CharacterClass::Alphanumeric);
        assert!(policy.admits("abc"));
        assert!(!policy.admits("a-b"));
        assert!(InputPolicy::unrestricted().admits("a-b"));
    }

    #[test]
    fn test_policy_max_length_counts_chars() {
        let policy = InputPolicy::new().max_length(3);
        assert_eq!(policy.max_length_limit(), Some(3));
        assert!(policy.admits("çağ"));
        assert!(!policy.admits("çağı"));
    }

    #[test]
    fn test_policy_combines_limits() {
        let policy = InputPolicy::new().max_length(4).allow(CharacterClass::Digits);
        assert!(policy.admits("1234"));
        assert!(!policy.admits("12345"));
        assert!(!policy.admits("12a"));
    }

    #[test]
    fn test_mask_requires_a_slot() {
        assert_eq!(
            Mask::new("--").unwrap_err(),
            MaskError::NoSlots("--".to_owned())
        );
        assert_eq!(
            MaskError::NoSlots("--".to_owned()).to_string(),
            "mask `--` has no `#` digit slot"
        );
    }

    #[rstest]
    #[case("", "")]
    #[case("5", "(5")]
    #[case("532", "(532")]
    #[case("5321", "(532) 1")]
    #[case("532-123 45 67", "(532) 123 45 67")]
    #[case("532123456789", "(532) 123 45 67")]
    fn test_mask_apply(#[case] raw: &str, #[case] expected: &str) {
        let mask = Mask::new("(###) ### ## ##").unwrap();
        assert_eq!(mask.apply(raw), expected);
    }

    #[rstest]
    #[case("", Some(""))]
    #[case("(", Some(""))]
    #[case("(532) 1", Some("5321"))]
    #[case("(5a2) 1", Some("5a21"))]
    #[case("(532) 1234", Some("5321234"))]
    #[case("abc", None)]
    #[case("(532-1", None)]
    fn test_mask_unmask(#[case] masked: &str, #[case] expected: Option<&str>) {
        let mask = Mask::new("(###) ###").unwrap();
        assert_eq!(mask.unmask(masked).as_deref(), expected);
    }

    #[test]
    fn test_mask_strip_skips_literal_digits() {
        let mask = Mask::new("+90 ### ###").unwrap();
        assert_eq!(mask.slots(), 6);
        let masked = mask.apply("532123");
        assert_eq!(masked, "+90 532 123");
        assert_eq!(mask.strip(&masked), "532123");
        assert_eq!(mask.strip("+90 532 1234"), "5321234");
    }
}
