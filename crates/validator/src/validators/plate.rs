//! Vehicle licence plate validator
//!
//! Plates have three parts: a two-digit province code (`01` to `81`), one to
//! three Latin letters, and a two- to four-digit number. The letter count
//! constrains the number length:
//!
//! | letters | digits  | example      |
//! |---------|---------|--------------|
//! | 1       | 4       | `34 A 1234`  |
//! | 2       | 3 or 4  | `06 AB 123`  |
//! | 3       | 2 or 3  | `35 ABC 12`  |
//!
//! Parts may be separated by single spaces. Input is trimmed and its ASCII
//! letters uppercased before it is checked; other letters never match.

use std::sync::LazyLock;

use crate::foundation::{Validate, ValidationError};

static PLATE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(?P<province>[0-9]{2}) ?(?P<letters>[A-Z]{1,3}) ?(?P<number>[0-9]{2,4})$")
        .expect("plate pattern is valid")
});

/// Validates vehicle licence plates.
///
/// # Examples
///
/// ```
/// use vcfield_validator::validators::Plate;
/// use vcfield_validator::foundation::Validate;
///
/// assert!(Plate.validate("34 ABC 123").is_ok());
/// assert!(Plate.validate("06ab1234").is_ok());
/// assert!(Plate.validate("99 A 1234").is_err()); // no such province
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Plate;

impl Plate {
    /// Highest province code.
    pub const LAST_PROVINCE: u8 = 81;
}

fn number_fits(letters: usize, digits: usize) -> bool {
    match letters {
        1 => digits == 4,
        2 => matches!(digits, 3 | 4),
        3 => matches!(digits, 2 | 3),
        _ => false,
    }
}

impl Validate for Plate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        let Some(caps) = PLATE_REGEX.captures(&normalized) else {
            return Err(ValidationError::invalid_format("plate"));
        };

        let province: u8 = caps["province"].parse().unwrap_or(0);
        if province == 0 || province > Self::LAST_PROVINCE {
            return Err(ValidationError::new(
                "plate_province",
                format!("Province code must be between 01 and {}", Self::LAST_PROVINCE),
            )
            .with_param("actual", caps["province"].to_owned()));
        }

        let (letters, digits) = (caps["letters"].len(), caps["number"].len());
        if !number_fits(letters, digits) {
            return Err(ValidationError::new(
                "plate_series",
                "Plate number length does not match its letter series",
            )
            .with_param("letters", letters.to_string())
            .with_param("digits", digits.to_string()));
        }

        Ok(())
    }
}

/// Creates a plate validator.
#[must_use]
pub const fn plate() -> Plate {
    Plate
}
