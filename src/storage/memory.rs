//! In-memory storage backend for testing and development

use super::StorageBackend;
use crate::error::{SchemaError, SchemaResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// In-memory storage backend
///
/// A single reader/writer lock guards the whole mapping: reads proceed
/// concurrently, writes are exclusive so the check-then-insert in [`write`]
/// cannot race. Nothing survives a process restart.
///
/// [`write`]: StorageBackend::write
pub struct MemoryStorage {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn write(&self, id: &str, data: &[u8]) -> SchemaResult<()> {
        let mut map = self.data.write();

        debug!(id, "storage write");

        if map.contains_key(id) {
            return Err(SchemaError::AlreadyExists(id.to_string()));
        }
        map.insert(id.to_string(), data.to_vec());

        Ok(())
    }

    async fn get(&self, id: &str) -> SchemaResult<Vec<u8>> {
        debug!(id, "storage get");

        self.data
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(id.to_string()))
    }
}
