//! Integration tests for data-driven rule chains.

#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use serde_json::json;
use vcfield_validator::prelude::*;

fn chain(value: serde_json::Value) -> ValidatorChain {
    serde_json::from_value::<ChainConfig>(value)
        .expect("valid config")
        .build()
        .expect("valid rules")
}

#[test]
fn amount_field() {
    let chain = chain(json!({
        "rules": [
            { "kind": "required", "message": "Enter an amount" },
            { "kind": "minimum_value", "min": 10, "message": "At least 10" },
            { "kind": "maximum_value", "max": 5000, "message": "At most 5000" }
        ]
    }));

    assert_eq!(chain.evaluate(None), Evaluation::invalid("Enter an amount"));
    assert_eq!(chain.evaluate(Some("5")), Evaluation::invalid("At least 10"));
    assert_eq!(chain.evaluate(Some("250")), Evaluation::valid());
    assert_eq!(chain.evaluate(Some("12000")), Evaluation::invalid("At most 5000"));
}

#[test]
fn card_field() {
    let chain = chain(json!({
        "rules": [
            { "kind": "trim_required", "message": "Enter your card number" },
            { "kind": "credit_card_number", "message": "Card number is invalid" }
        ]
    }));

    assert_eq!(
        chain.evaluate(Some("   ")),
        Evaluation::invalid("Enter your card number")
    );
    assert_eq!(
        chain.evaluate(Some("4111 1111 1111 1112")),
        Evaluation::invalid("Card number is invalid")
    );
    assert_eq!(chain.evaluate(Some("4111 1111 1111 1111")), Evaluation::valid());
}

#[test]
fn username_field_with_regex() {
    let chain = chain(json!({
        "rules": [
            { "kind": "minimum_length", "min": 3, "message": "Too short" },
            { "kind": "regex", "pattern": "[a-z][a-z0-9_]*", "message": "Lowercase letters, digits and _" }
        ]
    }));

    assert_eq!(chain.evaluate(Some("ab")), Evaluation::invalid("Too short"));
    assert_eq!(
        chain.evaluate(Some("1abc")),
        Evaluation::invalid("Lowercase letters, digits and _")
    );
    assert_eq!(chain.evaluate(Some("ali_34")), Evaluation::valid());
}

#[test]
fn config_round_trips_through_json() {
    let config = ChainConfig {
        rules: vec![
            RuleConfig::OnlyNumbers {
                message: "Digits only".to_owned(),
            },
            RuleConfig::TransactionDay {
                first: 1,
                last: 28,
                message: "Choose a day from 1 to 28".to_owned(),
            },
        ],
    };

    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(ChainConfig::from_json(&text).unwrap(), config);
}

#[test]
fn unknown_kind_is_rejected() {
    let err = ChainConfig::from_json(r#"{ "rules": [ { "kind": "email", "message": "m" } ] }"#)
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid rule configuration"));
}
