//! Building fields from JSON documents.

use pretty_assertions::assert_eq;
use serde_json::json;
use vcfield_field::{CharacterClass, ErrorDisplay, FieldConfig, FieldConfigError, FieldController};

fn field(value: serde_json::Value) -> FieldController {
    let config: FieldConfig = serde_json::from_value(value).unwrap();
    FieldController::from_config(config).unwrap()
}

#[test]
fn card_field() {
    let mut card = field(json!({
        "placeholder": "Card number",
        "allowed": "digits",
        "max_length": 16,
        "mask": "#### #### #### ####",
        "rules": [
            { "kind": "required", "message": "Enter your card number" },
            { "kind": "credit_card_number", "message": "Card number is not valid" }
        ]
    }));

    assert_eq!(card.placeholder(), Some("Card number"));
    assert_eq!(card.policy().allowed(), &CharacterClass::Digits);

    let mask = card.mask().unwrap().clone();
    let shown = mask.apply("4111111111111111");
    assert_eq!(shown, "4111 1111 1111 1111");
    assert!(card.admits(&shown));
    assert!(!card.admits("4111 1111 1111 11111"));

    card.end_editing(Some(&shown));
    assert_eq!(card.is_valid(), Some(true));

    card.end_editing(Some("4111 1111 1111 1112"));
    assert_eq!(
        card.error_display(),
        &ErrorDisplay::Show("Card number is not valid".to_owned())
    );
}

#[test]
fn plate_field() {
    let mut plate = field(json!({
        "allowed": { "custom": "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ " },
        "max_length": 10,
        "rules": [
            { "kind": "trim_required", "message": "Enter a plate" },
            { "kind": "plate_format", "message": "Plate is not valid" }
        ]
    }));

    assert!(plate.admits("34 ABC 123"));
    assert!(!plate.admits("34-ABC-123"));

    assert_eq!(plate.validate(true), Some(false));
    assert_eq!(plate.error_message(), Some("Enter a plate"));

    plate.text_changed(Some("34 ABC 123"));
    assert_eq!(plate.is_valid(), Some(true));
}

#[test]
fn day_field_rejects_inverted_range() {
    let err = FieldConfig::from_json(
        r#"{ "rules": [ { "kind": "transaction_day", "first": 20, "last": 5, "message": "m" } ] }"#,
    )
    .unwrap()
    .build()
    .unwrap_err();

    assert!(matches!(err, FieldConfigError::Rules(_)));
    assert_eq!(
        err.to_string(),
        "rule #0 (transaction_day) is invalid: invalid day range 20..=5: days must satisfy 1 <= first <= last <= 31"
    );
}

#[test]
fn custom_function_cannot_be_configured() {
    let err = FieldConfig::from_json(r#"{ "rules": [ { "kind": "custom_function", "message": "m" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, FieldConfigError::Json(_)));
}

#[test]
fn config_round_trips() {
    let config = FieldConfig {
        placeholder: Some("Amount".to_owned()),
        max_length: Some(6),
        allowed: CharacterClass::Digits,
        mask: None,
        rules: Vec::new(),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(FieldConfig::from_json(&json).unwrap(), config);
}
