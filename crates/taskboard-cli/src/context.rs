use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use taskboard_core::AppConfig;
use taskboard_persistence::{BoardGateway, FileBlobStore};
use taskboard_store::TaskBoardStore;
use tokio::task::JoinHandle;

/// One CLI invocation's store plus its background saver.
///
/// Call [`CliContext::finish`] before exiting so queued saves reach disk.
pub struct CliContext {
    store: TaskBoardStore,
    saver: JoinHandle<()>,
}

impl CliContext {
    pub async fn open(config: &AppConfig) -> Self {
        let data_dir = config.effective_data_dir();
        tracing::debug!(
            "Opening '{}' in {}",
            config.effective_storage_key(),
            data_dir.display()
        );

        let gateway = BoardGateway::new(
            Arc::new(FileBlobStore::new(data_dir)),
            config.effective_storage_key(),
        );
        let (store, worker) = TaskBoardStore::open(gateway).await;

        Self {
            store,
            saver: worker.spawn(),
        }
    }

    /// Flush queued saves and wait for the saver to exit
    pub async fn finish(mut self) -> anyhow::Result<()> {
        self.store.close_save_channel();
        self.saver.await?;
        Ok(())
    }
}

impl Deref for CliContext {
    type Target = TaskBoardStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl DerefMut for CliContext {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}
