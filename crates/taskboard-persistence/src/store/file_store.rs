use async_trait::async_trait;
use std::path::{Path, PathBuf};
use taskboard_core::{TaskBoardError, TaskBoardResult};

use crate::store::atomic_writer::AtomicWriter;
use crate::traits::BlobStore;

/// File-backed blob store: each key is a `<key>.json` file under one directory
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File that holds the blob for `key`
    pub fn path_for(&self, key: &str) -> TaskBoardResult<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\']);
        if !valid {
            return Err(TaskBoardError::Validation(format!(
                "Invalid storage key '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> TaskBoardResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        AtomicWriter::read_if_exists(&path).await
    }

    async fn put(&self, key: &str, bytes: &[u8]) -> TaskBoardResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, bytes).await
    }
}
