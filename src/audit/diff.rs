//! Diff generation for audit logging
//!
//! Produces a one-line, human-readable summary of which expense fields
//! changed between two snapshots.

use serde_json::Value;

/// Longest string value shown verbatim in a diff
const MAX_STRING_LEN: usize = 50;

/// Generate a human-readable diff between two JSON snapshots
///
/// Only top-level fields are compared. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after)
            .then(|| format!("{} -> {}", format_value(before), format_value(after)));
    };

    let mut changes = Vec::new();

    for (key, before_val) in before_obj {
        match after_obj.get(key) {
            Some(after_val) if after_val != before_val => changes.push(format!(
                "{}: {} -> {}",
                key,
                format_value(before_val),
                format_value(after_val)
            )),
            Some(_) => {}
            None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
        }
    }

    for (key, after_val) in after_obj {
        if !before_obj.contains_key(key) {
            changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
        }
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) if s.chars().count() > MAX_STRING_LEN => {
            let truncated: String = s.chars().take(MAX_STRING_LEN - 3).collect();
            format!("\"{}...\"", truncated)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_change() {
        let before = json!({"id": 1, "category": "Food", "amount": 200.0});
        let after = json!({"id": 1, "category": "Food", "amount": 250.5});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("amount: 200.0 -> 250.5"));
        assert!(!diff.contains("category"));
    }

    #[test]
    fn test_string_change() {
        let before = json!({"category": "Travel"});
        let after = json!({"category": "Transport"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "category: \"Travel\" -> \"Transport\"");
    }

    #[test]
    fn test_multiple_changes() {
        let before = json!({"date": "2025-01-01", "amount": 1, "description": "a"});
        let after = json!({"date": "2025-01-02", "amount": 1, "description": "b"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("date: \"2025-01-01\" -> \"2025-01-02\""));
        assert!(diff.contains("description: \"a\" -> \"b\""));
        assert!(!diff.contains("amount"));
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"old": 1});
        let after = json!({"new": 2});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old: 1 -> (removed)"));
        assert!(diff.contains("new: (added) -> 2"));
    }

    #[test]
    fn test_no_changes() {
        let snapshot = json!({"category": "Food", "amount": 5});
        assert!(generate_diff(&snapshot, &snapshot).is_none());
    }

    #[test]
    fn test_long_string_truncation() {
        let long = "é".repeat(80);
        let before = json!({"description": long});
        let after = json!({"description": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
