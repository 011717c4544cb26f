//! Change summaries for audit entries

use serde_json::Value;

/// Longest string value shown in a summary before it is cut
const MAX_SHOWN_CHARS: usize = 40;

/// Describe the top-level fields that differ between two records
///
/// Records always share the same field set, so only changed values are
/// reported, in the field order of `before`. Returns `None` when nothing
/// changed or either side is not an object.
pub fn summarize_changes(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return None;
    };

    let changes: Vec<String> = before_obj
        .iter()
        .filter_map(|(key, old)| {
            let new = after_obj.get(key)?;
            (old != new).then(|| format!("{}: {} -> {}", key, show(old), show(new)))
        })
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn show(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_SHOWN_CHARS => {
            let cut: String = s.chars().take(MAX_SHOWN_CHARS - 3).collect();
            format!("\"{}...\"", cut)
        }
        Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}
