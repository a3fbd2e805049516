use serde_json::Value;

/// Stringify a primitive field value for display.
///
/// Strings are used as-is (no quotes); numbers, booleans and `null` use their
/// JSON spelling; arrays join their elements with `,`.
pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_display)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}
