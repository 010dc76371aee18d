//! Basic usage example for vcfield-validator

use vcfield_validator::prelude::*;

fn main() {
    let chain = ValidatorChain::new()
        .rule(ValidationRule::required("Enter the amount"))
        .rule(ValidationRule::minimum_value(10.0, "Minimum amount is 10"))
        .rule(ValidationRule::maximum_value(5000.0, "Maximum amount is 5000"));

    for input in [None, Some(""), Some("5"), Some("250"), Some("12000")] {
        match chain.check(input) {
            Ok(()) => println!("✓ {input:?} is valid"),
            Err(violation) => println!("✗ {input:?}: {} ({})", violation.message, violation.source),
        }
    }
}
