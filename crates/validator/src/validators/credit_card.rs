//! Payment card number validator
//!
//! Card numbers arrive formatted the way a masked field shows them
//! (`4111 1111 1111 1111`). Spaces and dashes are ignored; everything else
//! must be a digit. The digits must number 13 to 19 and pass the Luhn
//! checksum.

use std::ops::RangeInclusive;

use crate::foundation::{Validate, ValidationError};

/// Validates payment card numbers.
///
/// # Examples
///
/// ```
/// use vcfield_validator::validators::CreditCard;
/// use vcfield_validator::foundation::Validate;
///
/// let card = CreditCard::new();
/// assert!(card.validate("4111 1111 1111 1111").is_ok());
/// assert!(card.validate("4111 1111 1111 1112").is_err()); // checksum
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CreditCard;

impl CreditCard {
    /// Allowed number of digits (ISO/IEC 7812).
    pub const DIGITS: RangeInclusive<usize> = 13..=19;

    /// Creates a card number validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Computes the Luhn checksum over ASCII digits.
fn luhn_valid(digits: &[u8]) -> bool {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &b)| {
            let d = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

impl Validate for CreditCard {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let mut digits = Vec::with_capacity(input.len());
        for b in input.bytes() {
            match b {
                b'0'..=b'9' => digits.push(b),
                b' ' | b'-' => {}
                _ => {
                    return Err(ValidationError::new(
                        "card_invalid_chars",
                        "Card number may contain only digits, spaces and dashes",
                    ));
                }
            }
        }

        if !Self::DIGITS.contains(&digits.len()) {
            return Err(ValidationError::new(
                "card_length",
                format!(
                    "Card number must have between {} and {} digits",
                    Self::DIGITS.start(),
                    Self::DIGITS.end()
                ),
            )
            .with_param("actual", digits.len().to_string()));
        }

        if !luhn_valid(&digits) {
            return Err(ValidationError::new(
                "card_checksum",
                "Card number checksum is invalid",
            ));
        }

        Ok(())
    }
}

/// Creates a card number validator.
#[must_use]
pub const fn credit_card() -> CreditCard {
    CreditCard::new()
}
