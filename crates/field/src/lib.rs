//! # vcfield-field
//!
//! Keeps the validation state of one text-input field and tells the
//! presentation layer when to show or hide the error message.
//!
//! The controller owns the field text, a [`ValidatorChain`] and a tri-state
//! [`Validity`]. Input events drive it; registered hooks observe it:
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use vcfield_field::{ErrorDisplay, FieldController};
//! use vcfield_validator::prelude::*;
//!
//! let chain = ValidatorChain::new()
//!     .rule(ValidationRule::required("Enter your card number"))
//!     .rule(ValidationRule::credit_card_number("Card number is not valid"));
//!
//! let shown = Rc::new(RefCell::new(Vec::new()));
//! let mut field = FieldController::new(chain);
//! field.on_error_display({
//!     let shown = Rc::clone(&shown);
//!     move |display| shown.borrow_mut().push(display.clone())
//! });
//!
//! field.begin_editing(None);
//! field.end_editing(Some("4111 1111 1111 1112"));
//! assert_eq!(field.is_valid(), Some(false));
//! assert_eq!(field.error_message(), Some("Card number is not valid"));
//!
//! field.end_editing(Some("4111 1111 1111 1111"));
//! assert_eq!(field.is_valid(), Some(true));
//!
//! assert_eq!(
//!     *shown.borrow(),
//!     vec![
//!         ErrorDisplay::Hide,
//!         ErrorDisplay::Show("Card number is not valid".to_owned()),
//!         ErrorDisplay::Hide,
//!     ]
//! );
//! ```
//!
//! The controller is single-threaded: hooks are `FnMut` closures called
//! inline, in a fixed order, from the `&mut self` method that caused them.

pub mod config;
pub mod controller;
pub mod event;
pub mod input;
pub mod state;

pub use config::{FieldConfig, FieldConfigError};
pub use controller::FieldController;
pub use event::ErrorDisplay;
pub use input::{CharacterClass, InputPolicy, Mask, MaskError};
pub use state::{FieldState, Validity};

pub use vcfield_validator::chain::ValidatorChain;
