//! Task filtering implementations.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::task::{Task, TaskPriority};

use super::task_filters::DueDateFilter;

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Case-insensitive substring match on title or description.
///
/// An empty term matches every task.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }
}

impl TaskFilter for SearchFilter {
    fn matches(&self, task: &Task) -> bool {
        self.needle.is_empty()
            || task.title.to_lowercase().contains(&self.needle)
            || task.description.to_lowercase().contains(&self.needle)
    }
}

/// Exact priority match.
pub struct PriorityMatch {
    priority: TaskPriority,
}

impl PriorityMatch {
    pub fn new(priority: TaskPriority) -> Self {
        Self { priority }
    }
}

impl TaskFilter for PriorityMatch {
    fn matches(&self, task: &Task) -> bool {
        task.priority == self.priority
    }
}

/// Due-date window relative to a reference time.
///
/// `Overdue` compares against the instant; `Today` and `Week` compare
/// calendar dates. Tasks without a due date never match.
pub struct DueDateMatch {
    filter: DueDateFilter,
    now: NaiveDateTime,
    today: NaiveDate,
}

impl DueDateMatch {
    pub fn new(filter: DueDateFilter, now: NaiveDateTime) -> Self {
        Self {
            filter,
            now,
            today: now.date(),
        }
    }
}

impl TaskFilter for DueDateMatch {
    fn matches(&self, task: &Task) -> bool {
        let Some(due) = task.due_date else {
            return matches!(self.filter, DueDateFilter::All);
        };
        match self.filter {
            DueDateFilter::All => true,
            DueDateFilter::Overdue => task.is_overdue(self.now),
            DueDateFilter::Today => due == self.today,
            DueDateFilter::Week => due >= self.today && due <= self.today + Duration::days(7),
        }
    }
}

/// Combine multiple filters with AND logic.
pub struct CompositeFilter {
    filters: Vec<Box<dyn TaskFilter>>,
}

impl CompositeFilter {
    /// Create an empty composite filter (matches all tasks).
    pub fn new() -> Self {
        Self { filters: vec![] }
    }

    pub fn with_filter(mut self, filter: Box<dyn TaskFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFilter for CompositeFilter {
    fn matches(&self, task: &Task) -> bool {
        self.filters.iter().all(|f| f.matches(task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::NewTask;
    use chrono::{TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(14, 30, 0).unwrap()
    }

    fn due_in(days: i64) -> Task {
        Task::new(
            format!("t{}", days),
            "b".into(),
            "c".into(),
            NewTask::new("Due").with_due_date(Some(today() + Duration::days(days))),
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
            0,
        )
    }

    fn undated() -> Task {
        Task {
            due_date: None,
            ..due_in(0)
        }
    }

    #[test]
    fn test_search_filter_title_or_description() {
        let task = Task {
            title: "Ship Release".into(),
            description: "Tag the BUILD".into(),
            ..due_in(0)
        };
        assert!(SearchFilter::new("release").matches(&task));
        assert!(SearchFilter::new("build").matches(&task));
        assert!(SearchFilter::new("").matches(&task));
        assert!(!SearchFilter::new("deploy").matches(&task));
    }

    #[test]
    fn test_week_window_is_inclusive() {
        let week = DueDateMatch::new(DueDateFilter::Week, now());
        assert!(!week.matches(&due_in(-1)));
        assert!(week.matches(&due_in(0)));
        assert!(week.matches(&due_in(7)));
        assert!(!week.matches(&due_in(8)));
    }

    #[test]
    fn test_today_and_overdue() {
        let today_filter = DueDateMatch::new(DueDateFilter::Today, now());
        assert!(today_filter.matches(&due_in(0)));
        assert!(!today_filter.matches(&due_in(1)));

        let overdue = DueDateMatch::new(DueDateFilter::Overdue, now());
        assert!(overdue.matches(&due_in(-3)));
        assert!(!overdue.matches(&due_in(1)));
    }

    #[test]
    fn test_due_today_is_overdue_after_midnight() {
        let overdue = DueDateMatch::new(DueDateFilter::Overdue, now());
        assert!(overdue.matches(&due_in(0)));

        let at_midnight = today().and_hms_opt(0, 0, 0).unwrap();
        let overdue = DueDateMatch::new(DueDateFilter::Overdue, at_midnight);
        assert!(!overdue.matches(&due_in(0)));
    }

    #[test]
    fn test_undated_only_passes_all() {
        let task = undated();
        assert!(DueDateMatch::new(DueDateFilter::All, now()).matches(&task));
        for filter in [
            DueDateFilter::Overdue,
            DueDateFilter::Today,
            DueDateFilter::Week,
        ] {
            assert!(!DueDateMatch::new(filter, now()).matches(&task));
        }
    }

    #[test]
    fn test_composite_filter() {
        let task = Task {
            priority: TaskPriority::High,
            ..due_in(2)
        };

        assert!(CompositeFilter::new().matches(&task));

        let passing = CompositeFilter::new()
            .with_filter(Box::new(PriorityMatch::new(TaskPriority::High)))
            .with_filter(Box::new(DueDateMatch::new(DueDateFilter::Week, now())));
        assert!(passing.matches(&task));

        let failing = CompositeFilter::new()
            .with_filter(Box::new(PriorityMatch::new(TaskPriority::High)))
            .with_filter(Box::new(DueDateMatch::new(DueDateFilter::Today, now())));
        assert!(!failing.matches(&task));
    }
}
