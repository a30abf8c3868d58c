//! Null normalization for documents submitted for validation
//!
//! Many real-world documents carry an explicit `null` for "field not
//! applicable". A schema's `required` keyword should not be tripped by a
//! key's mere textual presence with a null value, so null-valued object
//! fields are stripped before validation and the field is treated as absent
//! rather than present-with-wrong-type.

use serde_json::Value;

/// Recursively remove null-valued fields from JSON objects.
///
/// Array elements are never removed: dropping them would change the array's
/// length, which is semantically significant (positional schemas, tuple
/// `items` validation). The pass only recurses into them.
///
/// Scalars and a top-level `null` are left untouched; JSON Schema's own type
/// checking handles those. The transformation is idempotent.
pub fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for v in map.values_mut() {
                strip_nulls(v);
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                strip_nulls(v);
            }
        }
        _ => {}
    }
}
