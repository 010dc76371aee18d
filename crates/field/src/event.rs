//! Hooks and the error-display signal

use std::fmt;

/// Instruction to the presentation layer about the error label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ErrorDisplay {
    /// Show the message.
    Show(String),
    /// Hide any visible message.
    #[default]
    Hide,
}

impl ErrorDisplay {
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        matches!(self, Self::Show(_))
    }
}

pub(crate) type TextHook = Box<dyn FnMut(Option<&str>)>;
pub(crate) type ValidityHook = Box<dyn FnMut(bool)>;
pub(crate) type DisplayHook = Box<dyn FnMut(&ErrorDisplay)>;

/// Registered observers. Each slot holds at most one hook.
#[derive(Default)]
pub(crate) struct Hooks {
    pub(crate) text_changed: Option<TextHook>,
    pub(crate) begin_editing: Option<TextHook>,
    pub(crate) end_editing: Option<TextHook>,
    pub(crate) validity_changed: Option<ValidityHook>,
    pub(crate) error_display: Option<DisplayHook>,
}

impl Hooks {
    pub(crate) fn text_changed(&mut self, text: Option<&str>) {
        if let Some(hook) = &mut self.text_changed {
            hook(text);
        }
    }

    pub(crate) fn begin_editing(&mut self, text: Option<&str>) {
        if let Some(hook) = &mut self.begin_editing {
            hook(text);
        }
    }

    pub(crate) fn end_editing(&mut self, text: Option<&str>) {
        if let Some(hook) = &mut self.end_editing {
            hook(text);
        }
    }

    pub(crate) fn validity_changed(&mut self, valid: bool) {
        if let Some(hook) = &mut self.validity_changed {
            hook(valid);
        }
    }

    pub(crate) fn error_display(&mut self, display: &ErrorDisplay) {
        if let Some(hook) = &mut self.error_display {
            hook(display);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("text_changed", &self.text_changed.is_some())
            .field("begin_editing", &self.begin_editing.is_some())
            .field("end_editing", &self.end_editing.is_some())
            .field("validity_changed", &self.validity_changed.is_some())
            .field("error_display", &self.error_display.is_some())
            .finish()
    }
}
