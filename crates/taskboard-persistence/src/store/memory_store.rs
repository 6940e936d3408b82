use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use taskboard_core::TaskBoardResult;

use crate::traits::BlobStore;

/// Process-local blob store, for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a blob, e.g. a legacy payload
    pub fn with_blob(self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.blobs.lock().insert(key.into(), bytes.into());
        self
    }

    /// Current blob under `key`, read synchronously
    pub fn snapshot(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.lock().get(key).cloned()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> TaskBoardResult<Option<Vec<u8>>> {
        Ok(self.snapshot(key))
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> TaskBoardResult<()> {
        self.blobs.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
