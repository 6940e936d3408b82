//! Stored-format detection and upgrade.
//!
//! Older data is a bare JSON array of boards. Current data wraps that array
//! in a [`JsonEnvelope`]. Both load into the same `Vec<Board>`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_core::{TaskBoardError, TaskBoardResult};
use taskboard_domain::Board;
use uuid::Uuid;

use crate::traits::{FormatVersion, PersistenceMetadata};

/// Current on-disk shape of the board collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: Vec<Board>,
}

impl JsonEnvelope {
    pub fn new(boards: Vec<Board>, instance_id: Uuid) -> Self {
        Self {
            version: FormatVersion::CURRENT.as_u32(),
            metadata: PersistenceMetadata::new(FormatVersion::CURRENT, instance_id),
            data: boards,
        }
    }
}

/// Orchestrates migrations between format versions
pub struct Migrator;

impl Migrator {
    /// Detect the format of a parsed blob
    pub fn detect_version(value: &Value) -> TaskBoardResult<FormatVersion> {
        if value.is_array() {
            return Ok(FormatVersion::V1);
        }

        let version = value
            .get("version")
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                TaskBoardError::Serialization(
                    "Expected a board array or a versioned envelope".to_string(),
                )
            })?;

        u32::try_from(version)
            .ok()
            .and_then(FormatVersion::from_u32)
            .ok_or_else(|| {
                TaskBoardError::Serialization(format!("Unsupported format version: {}", version))
            })
    }

    /// Bring a blob of any known format up to the current envelope.
    ///
    /// Legacy data has no metadata of its own, so it is stamped with
    /// `instance_id` and the current time.
    pub fn migrate(value: Value, instance_id: Uuid) -> TaskBoardResult<JsonEnvelope> {
        match Self::detect_version(&value)? {
            FormatVersion::V1 => {
                let boards: Vec<Board> = serde_json::from_value(value)
                    .map_err(|e| TaskBoardError::Serialization(e.to_string()))?;
                tracing::info!("Upgrading {} boards from V1 format", boards.len());
                Ok(JsonEnvelope::new(boards, instance_id))
            }
            FormatVersion::V2 => serde_json::from_value(value)
                .map_err(|e| TaskBoardError::Serialization(e.to_string())),
        }
    }
}
