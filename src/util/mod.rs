//! Utility functions shared across the crate.

use serde_json::Value;

/// Name of a JSON value's type, for error messages.
///
/// # Example
/// ```
/// use fence_permission::util::json_type_name;
///
/// assert_eq!(json_type_name(&serde_json::json!(123)), "number");
/// assert_eq!(json_type_name(&serde_json::json!("yes")), "string");
/// ```
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(null)), "null");
        assert_eq!(json_type_name(&json!(false)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!([])), "array");
        assert_eq!(json_type_name(&json!({})), "object");
    }
}
