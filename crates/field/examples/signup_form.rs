//! A two-field sign-up form driven from the terminal.
//!
//! Run with `VCFIELD_LOG=vcfield_field=debug` to watch state transitions.

use vcfield_field::{ErrorDisplay, FieldConfig, FieldConfigError, FieldController};

fn phone_field() -> Result<FieldController, FieldConfigError> {
    FieldConfig::from_json(
        r#"{
            "placeholder": "Mobile number",
            "allowed": "digits",
            "max_length": 10,
            "mask": "(###) ### ## ##",
            "rules": [
                { "kind": "required", "message": "Enter your mobile number" },
                { "kind": "phone_number", "min_digits": 10, "message": "Check your mobile number" }
            ]
        }"#,
    )?
    .build()
}

fn day_field() -> Result<FieldController, FieldConfigError> {
    FieldConfig::from_json(
        r#"{
            "placeholder": "Statement day",
            "allowed": "digits",
            "max_length": 2,
            "rules": [
                { "kind": "only_numbers", "message": "Digits only" },
                { "kind": "transaction_day", "last": 28, "message": "Pick a day between 1 and 28" }
            ]
        }"#,
    )?
    .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    vcfield_log::init(vcfield_log::Config::from_env())?;

    let mut fields = [("phone", phone_field()?), ("day", day_field()?)];
    for (name, field) in &mut fields {
        let name = *name;
        field.on_error_display(move |display| match display {
            ErrorDisplay::Show(message) => println!("  [{name}] error: {message}"),
            ErrorDisplay::Hide => println!("  [{name}] error hidden"),
        });
    }

    let inputs = [("532123", "31"), ("5321234567", "15")];
    for (phone, day) in inputs {
        println!("submitting phone={phone} day={day}");
        let [(_, phone_field), (_, day_field)] = &mut fields;

        let masked = phone_field.mask().map_or_else(|| phone.to_owned(), |m| m.apply(phone));
        phone_field.begin_editing(None);
        phone_field.end_editing(Some(&masked));
        day_field.begin_editing(None);
        day_field.end_editing(Some(day));

        let outcomes: Vec<_> = fields
            .iter_mut()
            .map(|(_, field)| field.validate(true))
            .collect();
        let ok = outcomes.iter().all(|v| *v == Some(true));
        println!("  form valid: {ok}");
    }

    Ok(())
}
