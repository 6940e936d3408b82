pub mod action;
pub mod board;
pub mod column;
pub mod field_update;
pub mod filter;
pub mod locate;
pub mod operations;
pub mod query;
pub mod reducer;
pub mod sort;
pub mod state;
pub mod task;

pub use action::Action;
pub use board::{Board, BoardId};
pub use column::{Column, ColumnId};
pub use field_update::FieldUpdate;
pub use filter::{
    filter_tasks, filter_tasks_on, CompositeFilter, DueDateFilter, PriorityFilter, TaskFilter,
    TaskFilters,
};
pub use operations::TaskBoardOperations;
pub use query::{summarize, BoardSummary};
pub use reducer::reduce;
pub use state::AppState;
pub use task::{parse_due_date, NewTask, Task, TaskId, TaskPriority, TaskUpdate};
