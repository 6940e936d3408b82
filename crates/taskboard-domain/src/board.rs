use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::sort::sorted_by_order;

pub type BoardId = String;

/// Top-level container. A board owns its columns, which own their tasks;
/// dropping a board drops everything beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(id: BoardId, title: String, description: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            description,
            created_at,
            columns: Vec::new(),
        }
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Columns left to right.
    pub fn sorted_columns(&self) -> Vec<&Column> {
        sorted_by_order(&self.columns)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_sorted_columns_is_stable() {
        let mut board = Board::new("b1".into(), "Sprint".into(), String::new(), created_at());
        board.columns.push(Column::new("c1".into(), "b1".into(), "Done".into(), 2));
        board.columns.push(Column::new("c2".into(), "b1".into(), "Todo".into(), 0));
        board.columns.push(Column::new("c3".into(), "b1".into(), "Review".into(), 2));

        let ids: Vec<&str> = board
            .sorted_columns()
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["c2", "c1", "c3"]);
    }

    #[test]
    fn test_missing_description_and_columns_default() {
        let board: Board = serde_json::from_str(
            r#"{"id":"b1","title":"Legacy","createdAt":"2024-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(board.description, "");
        assert!(board.columns.is_empty());
        assert_eq!(board.task_count(), 0);
    }
}
