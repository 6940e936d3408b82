//! The operation surface a view layer drives.
//!
//! Mutators return nothing: callers observe results by reading
//! [`TaskBoardOperations::state`] afterwards. Missing ids are silent no-ops.

use crate::state::AppState;
use crate::task::{NewTask, TaskUpdate};

pub trait TaskBoardOperations {
    fn state(&self) -> &AppState;

    // Board operations
    fn create_board(&mut self, title: String, description: String);
    fn update_board(&mut self, board_id: &str, title: String, description: String);
    fn delete_board(&mut self, board_id: &str);
    fn set_current_board(&mut self, board_id: &str);

    // Column operations
    /// Appends after the board's existing columns.
    fn create_column(&mut self, board_id: &str, title: String);
    fn update_column(&mut self, column_id: &str, title: String);
    fn delete_column(&mut self, column_id: &str);

    // Task operations
    /// Appends at the end of the column. The position is counted on the
    /// currently open board, so open the board first.
    fn create_task(&mut self, column_id: &str, task: NewTask);
    fn update_task(&mut self, task_id: &str, updates: TaskUpdate);
    fn delete_task(&mut self, task_id: &str);
    /// `None` appends at the end of the target column.
    fn move_task(&mut self, task_id: &str, target_column_id: &str, new_order: Option<i32>);
    fn reorder_task(&mut self, task_id: &str, new_order: i32);
}
