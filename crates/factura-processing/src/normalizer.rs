//! Recursive pruning of empty invoice fields.

use serde_json::Value;

/// True for the values pruning removes: `""`, `null`, `[]`, `{}`, and
/// numeric zero. Zero counts as empty on purpose: zero-valued quantities
/// and prices are dropped from the output, matching the extraction schema's
/// use of `0` as the "not filled in" placeholder. Booleans are never empty.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::Bool(_) => false,
    }
}

/// Recursively prune empty values from a record.
///
/// Objects keep only entries whose value is non-empty after its own pruning,
/// so a nested object reduced to `{}` disappears along with its key.
/// Sequences are filtered the same way. Scalars pass through unchanged.
/// Applying the function twice equals applying it once.
pub fn prune_empty(value: Value) -> Value {
    match value {
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .filter_map(|(key, v)| {
                    let v = prune_empty(v);
                    (!is_empty(&v)).then_some((key, v))
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(prune_empty)
                .filter(|v| !is_empty(v))
                .collect(),
        ),
        scalar => scalar,
    }
}
