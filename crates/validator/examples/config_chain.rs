//! Building a rule chain from JSON

use vcfield_validator::prelude::*;

const RULES: &str = r#"{
    "rules": [
        { "kind": "trim_required", "message": "Enter the plate" },
        { "kind": "plate_format", "message": "Plate format is invalid" }
    ]
}"#;

fn main() -> Result<(), ConfigError> {
    let chain = ChainConfig::from_json(RULES)?.build()?;

    for input in ["  ", "34 abc 123", "99 X 1"] {
        let (valid, message) = chain.evaluate(Some(input)).into_parts();
        println!("{input:?}: valid={valid} message={message:?}");
    }

    Ok(())
}
