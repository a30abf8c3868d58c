//! Schema Registry - main interface
//!
//! Provides a thread-safe, async schema registry with:
//! - Create-once schema storage behind a pluggable backend
//! - JSON Schema compilation via the `jsonschema` crate
//! - Null normalization of documents before validation
//! - A small error taxonomy any transport layer can dispatch on
//!
//! Schemas are recompiled from stored bytes on every validation call rather
//! than cached. Schemas are small, and skipping the cache keeps a
//! corrupted-storage failure visible and leaves no invalidation invariant
//! to maintain.

use crate::compiler::{compile_schema, logical_name, validate_document};
use crate::config::RegistryConfig;
use crate::error::{SchemaError, SchemaResult};
use crate::normalize::strip_nulls;
use crate::storage::{create_storage, Storage};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};

/// Valid schema IDs: word characters and hyphen, non-empty
static SCHEMA_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Schema Registry - owns one storage instance for its lifetime
///
/// All operations are safe to call concurrently from multiple tasks.
/// Compilation and validation run outside any storage lock, so a long
/// validation never blocks schema creation or retrieval for other ids.
pub struct SchemaRegistry {
    storage: Storage,
}

impl SchemaRegistry {
    /// Create a new schema registry with the given configuration
    pub fn new(config: RegistryConfig) -> SchemaResult<Self> {
        let storage = create_storage(&config.storage)?;
        Ok(Self { storage })
    }

    /// Create a registry on top of an existing storage backend
    pub fn with_storage(storage: Storage) -> Self {
        Self { storage }
    }

    /// Store a new schema under `id`.
    ///
    /// The schema is compiled first; nothing is written when compilation
    /// fails. A schema id is immutable once created: re-uploading under the
    /// same id is a conflict even with byte-identical content.
    pub async fn create_schema(&self, id: &str, schema: &[u8]) -> SchemaResult<()> {
        validate_schema_id(id)?;

        compile_schema(&logical_name(id), schema)?;

        self.storage.write(id, schema).await?;
        info!(id, "schema created");
        Ok(())
    }

    /// Return the stored schema bytes unchanged, with no recompilation.
    pub async fn get_schema(&self, id: &str) -> SchemaResult<Vec<u8>> {
        validate_schema_id(id)?;
        self.storage.get(id).await
    }

    /// Validate a JSON document against the schema stored under `id`.
    ///
    /// The stored schema is recompiled; a compile failure here indicates
    /// corrupted storage. Null-valued object fields of the document are
    /// stripped before validation.
    pub async fn validate_json(&self, document: &[u8], id: &str) -> SchemaResult<()> {
        validate_schema_id(id)?;

        let schema_bytes = self.storage.get(id).await?;
        let name = logical_name(id);
        let compiled = compile_schema(&name, &schema_bytes)?;

        let mut value: Value = serde_json::from_slice(document)
            .map_err(|e| SchemaError::InvalidFormat(e.to_string()))?;
        strip_nulls(&mut value);

        validate_document(&compiled, &name, &value)?;
        debug!(id, "document validated");
        Ok(())
    }
}

/// Reject a malformed or empty schema ID before any I/O.
fn validate_schema_id(id: &str) -> SchemaResult<()> {
    if SCHEMA_ID_REGEX.is_match(id) {
        Ok(())
    } else {
        Err(SchemaError::InvalidInput(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new(RegistryConfig::memory()).unwrap()
    }

    #[test]
    fn test_schema_id_validation() {
        for id in ["s1", "user-value", "A_b-3", "0"] {
            assert!(validate_schema_id(id).is_ok(), "{id} should be valid");
        }
        for id in ["", "a/b", "a.b", "a b", "sch%ma", "../etc"] {
            assert!(validate_schema_id(id).is_err(), "{id} should be invalid");
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let registry = registry();
        let schema = br#"{"type":"object"}"#;

        registry.create_schema("s1", schema).await.unwrap();
        assert_eq!(registry.get_schema("s1").await.unwrap(), schema);
    }

    #[tokio::test]
    async fn test_invalid_schema_leaves_no_trace() {
        let registry = registry();

        let err = registry.create_schema("bad", b"{not json").await.unwrap_err();
        assert!(matches!(err, SchemaError::InvalidFormat(_)));

        // Compilation is a precondition, not a side effect: nothing stored
        let err = registry.get_schema("bad").await.unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_malformed_id_rejected_before_io() {
        let registry = registry();
        let err = registry
            .create_schema("a/b", br#"{"type":"object"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidInput(_)));

        let err = registry.validate_json(b"{}", "").await.unwrap_err();
        assert!(matches!(err, SchemaError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_validate_document_not_json() {
        let registry = registry();
        registry
            .create_schema("s1", br#"{"type":"object"}"#)
            .await
            .unwrap();

        let err = registry.validate_json(b"{broken", "s1").await.unwrap_err();
        assert!(matches!(err, SchemaError::InvalidFormat(_)));
    }
}
