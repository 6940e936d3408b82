//! The state reducer.
//!
//! `reduce` is the only place the board tree changes. It is pure and total:
//! every [`Action`] yields a valid state, and an action that names a missing
//! board, column or task leaves the state as it was.
//!
//! # Cascade rule
//!
//! Boards own their columns and columns own their tasks. Removing a board
//! removes every column and task beneath it; removing a column removes its
//! tasks. Nothing is orphaned and nothing survives its container.
//!
//! # Current board
//!
//! The selection is an id resolved against `boards` on read. After each
//! action the reducer clears it if the selected board is gone, so
//! [`AppState::current_board`] always reflects the updated tree.

use crate::action::Action;
use crate::board::Board;
use crate::column::Column;
use crate::locate::{board_position, column_position, task_position};
use crate::sort::sort_by_order;
use crate::state::AppState;
use crate::task::{Task, TaskUpdate};

pub fn reduce(mut state: AppState, action: Action) -> AppState {
    match action {
        Action::LoadBoards(boards) => {
            state.boards = boards;
        }
        Action::CreateBoard(board) => {
            state.boards.push(board);
        }
        Action::UpdateBoard {
            board_id,
            title,
            description,
        } => {
            if let Some(board) = board_mut(&mut state.boards, &board_id) {
                board.title = title;
                board.description = description;
            }
        }
        Action::DeleteBoard { board_id } => {
            state.boards.retain(|b| b.id != board_id);
        }
        Action::SetCurrentBoard { board_id } => {
            let found = board_position(&state.boards, &board_id).map(|_| board_id);
            state.select(found);
        }
        Action::CreateColumn { board_id, mut column } => {
            if let Some(board) = board_mut(&mut state.boards, &board_id) {
                column.board_id = board.id.clone();
                for task in &mut column.tasks {
                    task.column_id = column.id.clone();
                    task.board_id = board.id.clone();
                }
                board.columns.push(column);
            }
        }
        Action::UpdateColumn { column_id, title } => {
            if let Some(column) = column_mut(&mut state.boards, &column_id) {
                column.title = title;
            }
        }
        Action::DeleteColumn { column_id } => {
            if let Some((b, c)) = column_position(&state.boards, &column_id) {
                state.boards[b].columns.remove(c);
            }
        }
        Action::CreateTask { column_id, mut task } => {
            if let Some(column) = column_mut(&mut state.boards, &column_id) {
                task.column_id = column.id.clone();
                task.board_id = column.board_id.clone();
                column.tasks.push(task);
            }
        }
        Action::UpdateTask { task_id, updates } => {
            if let Some(task) = task_mut(&mut state.boards, &task_id) {
                merge_update(task, updates);
            }
        }
        Action::DeleteTask { task_id } => {
            if let Some((b, c, t)) = task_position(&state.boards, &task_id) {
                state.boards[b].columns[c].tasks.remove(t);
            }
        }
        Action::MoveTask {
            task_id,
            target_column_id,
            new_order,
        } => {
            move_task(&mut state.boards, &task_id, &target_column_id, new_order);
        }
        Action::ReorderTask { task_id, new_order } => {
            if let Some((b, c, t)) = task_position(&state.boards, &task_id) {
                let column = &mut state.boards[b].columns[c];
                column.tasks[t].order = new_order;
                sort_by_order(&mut column.tasks);
            }
        }
    }

    state.resync_selection();
    state
}

fn move_task(boards: &mut [Board], task_id: &str, target_column_id: &str, new_order: i32) {
    let Some((b, c, t)) = task_position(boards, task_id) else {
        return;
    };
    // The target must exist before the task is detached, otherwise it would be lost.
    if column_position(boards, target_column_id).is_none() {
        return;
    }

    let mut task = boards[b].columns[c].tasks.remove(t);

    let Some(target) = column_mut(boards, target_column_id) else {
        return;
    };
    task.column_id = target.id.clone();
    task.board_id = target.board_id.clone();
    task.order = new_order;
    target.tasks.push(task);
    sort_by_order(&mut target.tasks);
}

fn merge_update(task: &mut Task, updates: TaskUpdate) {
    if let Some(title) = updates.title {
        task.title = title;
    }
    if let Some(description) = updates.description {
        task.description = description;
    }
    if let Some(creator) = updates.creator {
        task.creator = creator;
    }
    if let Some(priority) = updates.priority {
        task.priority = priority;
    }
    updates.due_date.apply_to(&mut task.due_date);
}

fn board_mut<'a>(boards: &'a mut [Board], board_id: &str) -> Option<&'a mut Board> {
    boards.iter_mut().find(|b| b.id == board_id)
}

fn column_mut<'a>(boards: &'a mut [Board], column_id: &str) -> Option<&'a mut Column> {
    let (b, c) = column_position(boards, column_id)?;
    Some(&mut boards[b].columns[c])
}

fn task_mut<'a>(boards: &'a mut [Board], task_id: &str) -> Option<&'a mut Task> {
    let (b, c, t) = task_position(boards, task_id)?;
    Some(&mut boards[b].columns[c].tasks[t])
}
