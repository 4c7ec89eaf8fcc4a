use serde_json::{Value, json};

#[allow(dead_code)]
pub fn valid_input() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "message": "I need legal advice about my lease.",
        "privacy": true,
    })
}

#[allow(dead_code)]
pub fn with(field: &str, value: Value) -> Value {
    let mut input = valid_input();
    input[field] = value;
    input
}

#[allow(dead_code)]
pub fn without(field: &str) -> Value {
    let mut input = valid_input();
    if let Some(object) = input.as_object_mut() {
        object.remove(field);
    }
    input
}
