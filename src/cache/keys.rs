//! Cache key generation.
//!
//! Keys are `prefix` alone, or `prefix_<canonical json>` when parameters are
//! supplied. Canonical JSON sorts object keys at every depth, so two logically
//! identical parameter sets always land on the same key regardless of the
//! order their fields were inserted in.

use serde_json::Value;

/// Builds the cache key for `prefix` and optional `params`.
pub fn generate_key(prefix: &str, params: Option<&Value>) -> String {
    match params {
        None => prefix.to_string(),
        Some(params) => format!("{}_{}", prefix, canonical_json(params)),
    }
}

/// Renders `value` as compact JSON with object keys sorted recursively.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Serializing a plain string cannot fail
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
