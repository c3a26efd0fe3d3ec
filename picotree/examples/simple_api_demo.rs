// Example demonstrating the value API

use picotree::{parse, ParseError, Value, ValueType};

fn describe(value: &Value) {
    match value.value_type() {
        ValueType::Null => println!("Null"),
        ValueType::True | ValueType::False => println!("Bool: {}", value.get_boolean()),
        ValueType::Number => println!("Number: {}", value.get_number()),
        ValueType::String => match value.get_str() {
            Ok(s) => println!("String ({} bytes): {:?}", value.get_string_len(), s),
            Err(e) => println!("String with invalid UTF-8: {}", e),
        },
        other => println!("Other: {:?}", other),
    }
}

fn main() -> Result<(), ParseError> {
    let inputs = [
        "null",
        " true ",
        "-1.234E+10",
        r#""Hello\nWorld""#,
        "0123",
        "1e309",
        r#""unterminated"#,
    ];

    for json in inputs {
        println!("Input: {}", json);
        match parse(json) {
            Ok(value) => describe(&value),
            Err(e) => println!("Error: {}", e),
        }
        println!();
    }

    let value = parse(r#""done""#)?;
    describe(&value);
    Ok(())
}
