//! Schema compiler adapter
//!
//! Wraps the `jsonschema` crate behind the registry's error taxonomy. Every
//! compiler or validator message is sanitized before it is surfaced: the
//! synthetic root URL the compiler assigns to an anonymous in-memory schema
//! is replaced with the caller-visible logical name (the schema ID plus a
//! `.json` suffix), so callers never see internal addressing.

use crate::error::{SchemaError, SchemaResult};
use jsonschema::JSONSchema;
use serde_json::Value;

/// Root URL the `jsonschema` crate assigns to schemas compiled from an
/// in-memory document with no `$id`.
const ANONYMOUS_ROOT_URL: &str = "json-schema:///";

/// Logical name used for a schema in diagnostic messages. Not a filesystem
/// path.
pub fn logical_name(id: &str) -> String {
    format!("{id}.json")
}

/// Compile raw schema bytes into a reusable validator.
///
/// Any structural problem (malformed JSON, unsupported keyword values,
/// invalid `$schema` reference) surfaces as
/// [`SchemaError::InvalidFormat`] with a sanitized, human-readable message.
pub fn compile_schema(logical_name: &str, bytes: &[u8]) -> SchemaResult<JSONSchema> {
    let schema: Value = serde_json::from_slice(bytes)
        .map_err(|e| SchemaError::InvalidFormat(e.to_string()))?;
    JSONSchema::compile(&schema)
        .map_err(|e| SchemaError::InvalidFormat(sanitize(&e.to_string(), logical_name)))
}

/// Validate a document against a compiled schema.
///
/// Violations surface as [`SchemaError::InvalidFormat`] with the same
/// locator sanitization as [`compile_schema`]. Multiple violations are
/// joined into a single message.
pub fn validate_document(
    schema: &JSONSchema,
    logical_name: &str,
    document: &Value,
) -> SchemaResult<()> {
    if let Err(errors) = schema.validate(document) {
        let messages: Vec<String> = errors
            .map(|e| sanitize(&e.to_string(), logical_name))
            .take(3)
            .collect();
        return Err(SchemaError::InvalidFormat(messages.join("; ")));
    }
    Ok(())
}

/// Replace the compiler's internal absolute locator with the logical name.
fn sanitize(message: &str, logical_name: &str) -> String {
    message.replace(ANONYMOUS_ROOT_URL, logical_name)
}
