//! Field text and validity

use vcfield_validator::chain::Evaluation;

/// Result of the most recent evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Validity {
    /// Not evaluated since the last reset.
    #[default]
    Unevaluated,
    /// Every rule passed.
    Valid,
    /// A rule failed; carries that rule's message.
    Invalid(String),
}

impl Validity {
    /// `None` while unevaluated.
    #[must_use]
    pub const fn is_valid(&self) -> Option<bool> {
        match self {
            Self::Unevaluated => None,
            Self::Valid => Some(true),
            Self::Invalid(_) => Some(false),
        }
    }

    /// The failing rule's message, if invalid.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            Self::Unevaluated | Self::Valid => None,
        }
    }
}

impl From<Evaluation> for Validity {
    fn from(evaluation: Evaluation) -> Self {
        match evaluation.into_parts() {
            (true, _) => Self::Valid,
            (false, message) => Self::Invalid(message.unwrap_or_default()),
        }
    }
}

/// Current text plus validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub(crate) text: Option<String>,
    pub(crate) validity: Validity,
}

impl FieldState {
    /// The stored text; `None` until the field has seen any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub const fn validity(&self) -> &Validity {
        &self.validity
    }

    #[must_use]
    pub const fn is_valid(&self) -> Option<bool> {
        self.validity.is_valid()
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.validity.message()
    }
}
