//! Diff generation for audit logging
//!
//! Generates human-readable summaries of the fields an update changed.

use serde_json::Value;

const MAX_SHOWN_CHARS: usize = 50;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are reported; records are flat objects.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
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
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            // Truncate on char boundaries; notes are often non-ASCII
            if s.chars().count() > MAX_SHOWN_CHARS {
                let head: String = s.chars().take(MAX_SHOWN_CHARS - 3).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
