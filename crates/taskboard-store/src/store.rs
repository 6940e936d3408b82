use taskboard_core::{Clock, IdGenerator, SystemClock, TimestampIdGenerator};
use taskboard_domain::{
    reduce, Action, AppState, Board, Column, NewTask, Task, TaskBoardOperations, TaskUpdate,
};
use taskboard_persistence::BoardGateway;
use tokio::sync::mpsc;

use crate::save_worker::SaveWorker;

/// Owns the application state and routes every change through the reducer.
///
/// # Save Behavior
///
/// After each dispatch that changes the board collection, a snapshot of the
/// whole collection is queued for the [`SaveWorker`]:
/// - No debounce: every change is queued immediately
/// - Fire-and-forget: callers never wait for or see save failures
/// - Snapshots are written in dispatch order
///
/// Opening a board does not queue a save.
pub struct TaskBoardStore {
    state: AppState,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    save_tx: Option<mpsc::UnboundedSender<Vec<Board>>>,
}

impl TaskBoardStore {
    /// In-memory store with no persistence
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            ids: Box::new(TimestampIdGenerator),
            clock: Box::new(SystemClock),
            save_tx: None,
        }
    }

    /// Load the saved boards and wire up persistence.
    ///
    /// Never fails: unreadable storage starts an empty session. The returned
    /// worker must be run for saves to reach the gateway.
    pub async fn open(gateway: BoardGateway) -> (Self, SaveWorker) {
        let boards = gateway.load().await;
        let (tx, rx) = mpsc::unbounded_channel();

        let mut store = Self::new();
        store.save_tx = Some(tx);
        store.dispatch(Action::LoadBoards(boards));

        (store, SaveWorker::new(gateway, rx))
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run `action` through the reducer and queue a save if boards changed
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching: {}", action.description());
        let persist = action.changes_boards();

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        if persist {
            self.queue_save();
        }
    }

    /// Close the save channel so the worker drains what is queued and exits
    pub fn close_save_channel(&mut self) {
        self.save_tx = None;
    }

    pub fn has_save_channel(&self) -> bool {
        self.save_tx.is_some()
    }

    fn queue_save(&self) {
        if let Some(ref tx) = self.save_tx {
            tracing::debug!("Queueing snapshot for async save");
            if let Err(e) = tx.send(self.state.boards.clone()) {
                tracing::error!("Failed to queue save: channel closed: {:?}", e);
            }
        } else {
            tracing::debug!("No save channel available - skipping save");
        }
    }
}

impl Default for TaskBoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBoardOperations for TaskBoardStore {
    fn state(&self) -> &AppState {
        &self.state
    }

    fn create_board(&mut self, title: String, description: String) {
        let board = Board::new(self.ids.generate(), title, description, self.clock.now());
        self.dispatch(Action::CreateBoard(board));
    }

    fn update_board(&mut self, board_id: &str, title: String, description: String) {
        self.dispatch(Action::UpdateBoard {
            board_id: board_id.to_string(),
            title,
            description,
        });
    }

    fn delete_board(&mut self, board_id: &str) {
        self.dispatch(Action::DeleteBoard {
            board_id: board_id.to_string(),
        });
    }

    fn set_current_board(&mut self, board_id: &str) {
        self.dispatch(Action::SetCurrentBoard {
            board_id: board_id.to_string(),
        });
    }

    fn create_column(&mut self, board_id: &str, title: String) {
        let order = self
            .state
            .board(board_id)
            .map(|b| append_order(b.columns.len()))
            .unwrap_or(0);
        let column = Column::new(self.ids.generate(), board_id.to_string(), title, order);
        self.dispatch(Action::CreateColumn {
            board_id: board_id.to_string(),
            column,
        });
    }

    fn update_column(&mut self, column_id: &str, title: String) {
        self.dispatch(Action::UpdateColumn {
            column_id: column_id.to_string(),
            title,
        });
    }

    fn delete_column(&mut self, column_id: &str) {
        self.dispatch(Action::DeleteColumn {
            column_id: column_id.to_string(),
        });
    }

    fn create_task(&mut self, column_id: &str, task: NewTask) {
        // Position comes from the open board only; a column elsewhere counts as empty.
        let order = self
            .state
            .current_board()
            .and_then(|b| b.column(column_id))
            .map(|c| append_order(c.tasks.len()))
            .unwrap_or(0);
        let board_id = self
            .state
            .column(column_id)
            .map(|c| c.board_id.clone())
            .unwrap_or_default();

        let task = Task::new(
            self.ids.generate(),
            board_id,
            column_id.to_string(),
            task,
            self.clock.now(),
            order,
        );
        self.dispatch(Action::CreateTask {
            column_id: column_id.to_string(),
            task,
        });
    }

    fn update_task(&mut self, task_id: &str, updates: TaskUpdate) {
        self.dispatch(Action::UpdateTask {
            task_id: task_id.to_string(),
            updates,
        });
    }

    fn delete_task(&mut self, task_id: &str) {
        self.dispatch(Action::DeleteTask {
            task_id: task_id.to_string(),
        });
    }

    fn move_task(&mut self, task_id: &str, target_column_id: &str, new_order: Option<i32>) {
        let new_order = new_order.unwrap_or_else(|| {
            self.state
                .column(target_column_id)
                .map(|c| append_order(c.tasks.len()))
                .unwrap_or(0)
        });
        self.dispatch(Action::MoveTask {
            task_id: task_id.to_string(),
            target_column_id: target_column_id.to_string(),
            new_order,
        });
    }

    fn reorder_task(&mut self, task_id: &str, new_order: i32) {
        self.dispatch(Action::ReorderTask {
            task_id: task_id.to_string(),
            new_order,
        });
    }
}

fn append_order(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
