use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskboard_core::TaskBoardResult;
use uuid::Uuid;

/// Metadata written alongside every saved board collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the process that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(format_version: FormatVersion, instance_id: Uuid) -> Self {
        Self {
            format_version: format_version.as_u32(),
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Key-value blob storage.
///
/// One key holds one opaque byte blob; `put` overwrites it whole.
/// Implementations handle different backends (files, memory).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the blob under `key`, or `None` if nothing was ever stored there
    async fn get(&self, key: &str) -> TaskBoardResult<Option<Vec<u8>>>;

    /// Replace the blob under `key`
    async fn put(&self, key: &str, bytes: &[u8]) -> TaskBoardResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> TaskBoardResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> TaskBoardResult<T>;
}

/// Format versions for migration tracking
///
/// - `V1`: a bare JSON array of boards
/// - `V2`: the array wrapped in an envelope with `version` and `metadata`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormatVersion {
    V1,
    V2,
}

impl FormatVersion {
    pub const CURRENT: FormatVersion = FormatVersion::V2;

    pub fn as_u32(self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            1 => Some(Self::V1),
            2 => Some(Self::V2),
            _ => None,
        }
    }
}
