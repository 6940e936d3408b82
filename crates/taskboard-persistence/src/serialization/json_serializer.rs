use crate::traits::Serializer;
use taskboard_core::{TaskBoardError, TaskBoardResult};

/// JSON serializer for domain models
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> TaskBoardResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| TaskBoardError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> TaskBoardResult<T> {
        serde_json::from_slice(bytes).map_err(|e| TaskBoardError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskboard_domain::Board;

    #[test]
    fn test_boards_serialize_in_camel_case() {
        let boards = vec![Board::new(
            "b1".into(),
            "Sprint".into(),
            String::new(),
            Utc::now(),
        )];

        let bytes = JsonSerializer.serialize(&boards).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains("createdAt"));
        assert!(text.contains('\n'));

        let back: Vec<Board> = JsonSerializer.deserialize(&bytes).unwrap();
        assert_eq!(back, boards);
    }

    #[test]
    fn test_deserialize_garbage_is_serialization_error() {
        let result: TaskBoardResult<Vec<Board>> = JsonSerializer.deserialize(b"{not json");
        assert!(matches!(result, Err(TaskBoardError::Serialization(_))));
    }
}
