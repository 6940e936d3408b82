//! Task filtering.
//!
//! [`TaskFilters`] holds the user's filter settings; the [`TaskFilter`]
//! implementations in [`task_filter`] do the matching. Filtering never
//! reorders or mutates: the result keeps the input order.

pub mod task_filter;
pub mod task_filters;

pub use task_filter::{CompositeFilter, DueDateMatch, PriorityMatch, SearchFilter, TaskFilter};
pub use task_filters::{DueDateFilter, PriorityFilter, TaskFilters};

use chrono::NaiveDateTime;
use taskboard_core::{Clock, SystemClock};

use crate::task::Task;

/// Filter against the local wall clock.
pub fn filter_tasks<'a, I>(tasks: I, filters: &TaskFilters) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    filter_tasks_on(tasks, filters, SystemClock.local_now())
}

/// Filter with an explicit local time for the due-date predicate.
pub fn filter_tasks_on<'a, I>(tasks: I, filters: &TaskFilters, now: NaiveDateTime) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let filter = filters.to_filter(now);
    tasks.into_iter().filter(|t| filter.matches(t)).collect()
}
