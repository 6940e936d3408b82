use serde::{Deserialize, Serialize};

use crate::board::BoardId;
use crate::sort::sorted_by_order;
use crate::task::Task;

pub type ColumnId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub board_id: BoardId,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: ColumnId, board_id: BoardId, title: String, order: i32) -> Self {
        Self {
            id,
            title,
            board_id,
            order,
            tasks: Vec::new(),
        }
    }

    /// Tasks in display order, ties kept in stored order.
    pub fn sorted_tasks(&self) -> Vec<&Task> {
        sorted_by_order(&self.tasks)
    }
}
