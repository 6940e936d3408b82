use crate::board::{Board, BoardId};
use crate::column::{Column, ColumnId};
use crate::task::{Task, TaskId, TaskUpdate};

/// Every state transition the reducer knows about.
///
/// Actions arrive fully formed: ids, timestamps and default orders are
/// filled in by the store before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadBoards(Vec<Board>),
    CreateBoard(Board),
    UpdateBoard {
        board_id: BoardId,
        title: String,
        description: String,
    },
    DeleteBoard {
        board_id: BoardId,
    },
    SetCurrentBoard {
        board_id: BoardId,
    },
    CreateColumn {
        board_id: BoardId,
        column: Column,
    },
    UpdateColumn {
        column_id: ColumnId,
        title: String,
    },
    DeleteColumn {
        column_id: ColumnId,
    },
    CreateTask {
        column_id: ColumnId,
        task: Task,
    },
    UpdateTask {
        task_id: TaskId,
        updates: TaskUpdate,
    },
    DeleteTask {
        task_id: TaskId,
    },
    MoveTask {
        task_id: TaskId,
        target_column_id: ColumnId,
        new_order: i32,
    },
    ReorderTask {
        task_id: TaskId,
        new_order: i32,
    },
}

impl Action {
    /// Whether the action can alter the board collection (and so needs a save).
    pub fn changes_boards(&self) -> bool {
        !matches!(self, Action::SetCurrentBoard { .. } | Action::LoadBoards(_))
    }

    pub fn description(&self) -> String {
        match self {
            Action::LoadBoards(boards) => format!("Load {} boards", boards.len()),
            Action::CreateBoard(board) => format!("Create board: '{}'", board.title),
            Action::UpdateBoard { board_id, .. } => format!("Update board {}", board_id),
            Action::DeleteBoard { board_id } => format!("Delete board {}", board_id),
            Action::SetCurrentBoard { board_id } => format!("Open board {}", board_id),
            Action::CreateColumn { board_id, column } => {
                format!("Create column '{}' in board {}", column.title, board_id)
            }
            Action::UpdateColumn { column_id, .. } => format!("Rename column {}", column_id),
            Action::DeleteColumn { column_id } => format!("Delete column {}", column_id),
            Action::CreateTask { column_id, task } => {
                format!("Create task '{}' in column {}", task.title, column_id)
            }
            Action::UpdateTask { task_id, .. } => format!("Update task {}", task_id),
            Action::DeleteTask { task_id } => format!("Delete task {}", task_id),
            Action::MoveTask {
                task_id,
                target_column_id,
                new_order,
            } => format!(
                "Move task {} to column {} at {}",
                task_id, target_column_id, new_order
            ),
            Action::ReorderTask { task_id, new_order } => {
                format!("Reorder task {} to {}", task_id, new_order)
            }
        }
    }
}
