//! Directory-backed file storage backend

use super::StorageBackend;
use crate::error::{SchemaError, SchemaResult};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// File storage backend: one file per schema ID inside a base directory.
///
/// A component-level reader/writer lock serializes logical operations; the
/// backend does not rely on filesystem-level atomicity alone. The
/// existence-check and create in [`write`] happen inside one writer
/// critical section.
///
/// [`write`]: StorageBackend::write
pub struct FileStorage {
    dir: PathBuf,
    lock: RwLock<()>,
}

impl FileStorage {
    /// Create a file storage backend rooted at `dir`.
    ///
    /// The directory (including parents) is created if absent; failure to
    /// create it is fatal to construction.
    pub fn new(dir: impl Into<PathBuf>) -> SchemaResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            lock: RwLock::new(()),
        })
    }
}

#[async_trait]
impl StorageBackend for FileStorage {
    async fn write(&self, id: &str, data: &[u8]) -> SchemaResult<()> {
        let _guard = self.lock.write();

        debug!(id, "storage write");

        let path = self.dir.join(id);
        if path.exists() {
            return Err(SchemaError::AlreadyExists(id.to_string()));
        }
        fs::write(&path, data)?;

        Ok(())
    }

    async fn get(&self, id: &str) -> SchemaResult<Vec<u8>> {
        let _guard = self.lock.read();

        debug!(id, "storage get");

        match fs::read(self.dir.join(id)) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(SchemaError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.write("s1", b"{\"type\":\"object\"}").await.unwrap();
        assert_eq!(storage.get("s1").await.unwrap(), b"{\"type\":\"object\"}");
    }

    #[tokio::test]
    async fn test_write_existing_id_conflicts() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        storage.write("s1", b"first").await.unwrap();
        let err = storage.write("s1", b"second").await.unwrap_err();
        assert!(matches!(err, SchemaError::AlreadyExists(_)));

        assert_eq!(storage.get("s1").await.unwrap(), b"first");
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path()).unwrap();

        let err = storage.get("missing").await.unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let storage = FileStorage::new(dir.path()).unwrap();
            storage.write("s1", b"persisted").await.unwrap();
        }

        let storage = FileStorage::new(dir.path()).unwrap();
        assert_eq!(storage.get("s1").await.unwrap(), b"persisted");
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        FileStorage::new(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
