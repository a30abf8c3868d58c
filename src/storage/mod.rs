//! Storage backends for the Schema Registry
//!
//! This module provides pluggable storage backends with create-once
//! semantics:
//!
//! - **Memory**: in-memory storage for development and testing
//! - **File**: one file per schema ID inside a configured base directory
//!
//! A key, once written, is never overwritten or deleted; there are no
//! update or delete operations. Uniqueness of (schema ID -> document) is
//! the load-bearing invariant of the whole service.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::StorageConfig;
use crate::error::SchemaResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Storage backend trait for schema persistence
///
/// Implementations must make the existence-check-and-create in `write` a
/// single atomic critical section with respect to concurrent writers of the
/// same id, so that at most one create ever succeeds per id.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Store bytes under `id` only if absent.
    ///
    /// Returns [`SchemaError::AlreadyExists`](crate::SchemaError::AlreadyExists)
    /// when the id already has a document, even for byte-identical content.
    async fn write(&self, id: &str, data: &[u8]) -> SchemaResult<()>;

    /// Return previously written bytes unchanged.
    ///
    /// Returns [`SchemaError::NotFound`](crate::SchemaError::NotFound) when
    /// the id was never written.
    async fn get(&self, id: &str) -> SchemaResult<Vec<u8>>;
}

/// Type alias for a shared storage backend
pub type Storage = Arc<dyn StorageBackend>;

/// Create a storage backend from configuration
pub fn create_storage(config: &StorageConfig) -> SchemaResult<Storage> {
    match config {
        StorageConfig::Memory => {
            tracing::info!("using memory storage");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StorageConfig::File { dir } => {
            tracing::info!(dir = %dir.display(), "using file storage");
            Ok(Arc::new(FileStorage::new(dir)?))
        }
    }
}
