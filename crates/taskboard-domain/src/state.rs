//! Application state: the board collection plus the open-board selection.

use crate::board::{Board, BoardId};
use crate::column::Column;
use crate::locate;
use crate::task::Task;

/// The whole universe of boards and which one is open.
///
/// The open board is stored as an id and resolved against `boards` on every
/// read, so [`AppState::current_board`] can never disagree with the board
/// list. Only the reducer changes the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub boards: Vec<Board>,
    current_board_id: Option<BoardId>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_board(&self) -> Option<&Board> {
        let id = self.current_board_id.as_deref()?;
        self.board(id)
    }

    pub fn current_board_id(&self) -> Option<&str> {
        self.current_board().map(|b| b.id.as_str())
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    /// Column lookup across every board.
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        let (b, c) = locate::column_position(&self.boards, column_id)?;
        Some(&self.boards[b].columns[c])
    }

    /// Task lookup across every board.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        let (b, c, t) = locate::task_position(&self.boards, task_id)?;
        Some(&self.boards[b].columns[c].tasks[t])
    }

    pub fn task_count(&self) -> usize {
        self.boards.iter().map(Board::task_count).sum()
    }

    pub(crate) fn select(&mut self, board_id: Option<BoardId>) {
        self.current_board_id = board_id;
    }

    /// Drop the selection if its board no longer exists.
    pub(crate) fn resync_selection(&mut self) {
        if self.current_board().is_none() {
            self.current_board_id = None;
        }
    }
}
