//! Transaction day validator
//!
//! Recurring payments and standing orders ask for the day of the month on
//! which the transaction runs. The field holds a plain day number such as
//! `"5"` or `"05"`.

use crate::error::RuleError;
use crate::foundation::ValidationError;

/// Parses a day number: optional surrounding whitespace, ASCII digits only.
fn parse_day(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

crate::validator! {
    /// Validates that text is a day of the month within an accepted range.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcfield_validator::validators::TransactionDay;
    /// use vcfield_validator::foundation::Validate;
    ///
    /// let day = TransactionDay::default();
    /// assert!(day.validate("15").is_ok());
    /// assert!(day.validate("32").is_err());
    ///
    /// let early = TransactionDay::new(1, 28).unwrap();
    /// assert!(early.validate("29").is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub TransactionDay { first: u8, last: u8 } for str;
    rule(self, input) {
        parse_day(input).is_some_and(|day| (u32::from(self.first)..=u32::from(self.last)).contains(&day))
    }
    error(self, input) {
        match parse_day(input) {
            Some(day) => ValidationError::out_of_range(u32::from(self.first), u32::from(self.last), day),
            None => ValidationError::invalid_format("day of month"),
        }
    }
    new(first: u8, last: u8) -> RuleError {
        if first == 0 || first > last || last > TransactionDay::LAST_DAY {
            return Err(RuleError::InvalidDayRange { first, last });
        }
        Ok(Self { first, last })
    }
    fn transaction_day(first: u8, last: u8) -> RuleError;
}

impl TransactionDay {
    /// Latest day any month can have.
    pub const LAST_DAY: u8 = 31;

    /// First accepted day.
    #[must_use]
    pub fn first(&self) -> u8 {
        self.first
    }

    /// Last accepted day.
    #[must_use]
    pub fn last(&self) -> u8 {
        self.last
    }
}

impl Default for TransactionDay {
    /// Accepts every day from 1 to 31.
    fn default() -> Self {
        Self {
            first: 1,
            last: Self::LAST_DAY,
        }
    }
}
