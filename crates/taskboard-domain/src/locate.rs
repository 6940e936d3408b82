//! Global lookup by id across the board tree.
//!
//! Column and task ids are unique across all boards, so callers can address
//! them without naming the board. Each lookup walks the whole tree; positions
//! are returned as indices so the caller can borrow mutably afterwards.

use crate::board::Board;

pub fn board_position(boards: &[Board], board_id: &str) -> Option<usize> {
    boards.iter().position(|b| b.id == board_id)
}

/// `(board index, column index)` of a column.
pub fn column_position(boards: &[Board], column_id: &str) -> Option<(usize, usize)> {
    boards.iter().enumerate().find_map(|(b, board)| {
        board
            .columns
            .iter()
            .position(|c| c.id == column_id)
            .map(|c| (b, c))
    })
}

/// `(board index, column index, task index)` of a task.
pub fn task_position(boards: &[Board], task_id: &str) -> Option<(usize, usize, usize)> {
    boards.iter().enumerate().find_map(|(b, board)| {
        board.columns.iter().enumerate().find_map(|(c, column)| {
            column
                .tasks
                .iter()
                .position(|t| t.id == task_id)
                .map(|t| (b, c, t))
        })
    })
}
