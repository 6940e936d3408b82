use std::sync::Arc;

use serde_json::Value;
use taskboard_core::TaskBoardResult;
use taskboard_domain::Board;
use uuid::Uuid;

use crate::migration::{JsonEnvelope, Migrator};
use crate::serialization::JsonSerializer;
use crate::traits::{BlobStore, Serializer};

/// Loads and saves the whole board collection under one well-known key.
///
/// `load` and `save` never fail: storage and parse errors are logged and
/// swallowed so the in-memory state stays authoritative. The `try_*`
/// variants surface the error for callers that want it.
#[derive(Clone)]
pub struct BoardGateway {
    store: Arc<dyn BlobStore>,
    key: String,
    instance_id: Uuid,
}

impl BoardGateway {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            instance_id: Uuid::new_v4(),
        }
    }

    /// Saved boards, or an empty list if nothing usable is stored
    pub async fn load(&self) -> Vec<Board> {
        match self.try_load().await {
            Ok(boards) => boards,
            Err(e) => {
                tracing::warn!("Failed to load boards from '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    pub async fn try_load(&self) -> TaskBoardResult<Vec<Board>> {
        let Some(bytes) = self.store.get(&self.key).await? else {
            tracing::info!("No saved boards under '{}'", self.key);
            return Ok(Vec::new());
        };

        let value: Value = JsonSerializer.deserialize(&bytes)?;
        let envelope = Migrator::migrate(value, self.instance_id)?;

        tracing::info!(
            "Loaded {} boards ({} bytes) from '{}'",
            envelope.data.len(),
            bytes.len(),
            self.key
        );
        Ok(envelope.data)
    }

    /// Overwrite the stored collection; failures are logged only
    pub async fn save(&self, boards: &[Board]) {
        if let Err(e) = self.try_save(boards).await {
            tracing::error!("Failed to save boards to '{}': {}", self.key, e);
        }
    }

    pub async fn try_save(&self, boards: &[Board]) -> TaskBoardResult<()> {
        let envelope = JsonEnvelope::new(boards.to_vec(), self.instance_id);
        let bytes = JsonSerializer.serialize(&envelope)?;
        self.store.put(&self.key, &bytes).await?;

        tracing::info!(
            "Saved {} boards ({} bytes) to '{}'",
            boards.len(),
            bytes.len(),
            self.key
        );
        Ok(())
    }
}
