use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::board::{Board, BoardId};

/// Board overview with its column and task counts, as shown in board lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub id: BoardId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub column_count: usize,
    pub task_count: usize,
}

impl BoardSummary {
    pub fn from_board(board: &Board) -> Self {
        Self {
            id: board.id.clone(),
            title: board.title.clone(),
            description: board.description.clone(),
            created_at: board.created_at,
            column_count: board.columns.len(),
            task_count: board.task_count(),
        }
    }
}

pub fn summarize(boards: &[Board]) -> Vec<BoardSummary> {
    boards.iter().map(BoardSummary::from_board).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use crate::task::{NewTask, Task};

    #[test]
    fn test_summary_counts() {
        let now = Utc::now();
        let mut board = Board::new("b1".into(), "Sprint".into(), "Q3".into(), now);
        let mut todo = Column::new("c1".into(), "b1".into(), "Todo".into(), 0);
        for i in 0..3 {
            todo.tasks.push(Task::new(
                format!("t{}", i),
                "b1".into(),
                "c1".into(),
                NewTask::new("x"),
                now,
                i,
            ));
        }
        board.columns.push(todo);
        board.columns.push(Column::new("c2".into(), "b1".into(), "Done".into(), 1));

        let summaries = summarize(&[board]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].column_count, 2);
        assert_eq!(summaries[0].task_count, 3);

        let json = serde_json::to_value(&summaries[0]).unwrap();
        assert_eq!(json["taskCount"], 3);
        assert_eq!(json["columnCount"], 2);
    }
}
