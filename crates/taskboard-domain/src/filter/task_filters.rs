//! Task filter configuration.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::str::FromStr;

use super::task_filter::{CompositeFilter, DueDateMatch, PriorityMatch, SearchFilter};
use crate::task::TaskPriority;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority filter '{}'", other)),
        }
    }
}

impl PriorityFilter {
    /// The concrete priority selected, or `None` for "all".
    pub fn priority(self) -> Option<TaskPriority> {
        match self {
            PriorityFilter::All => None,
            PriorityFilter::Low => Some(TaskPriority::Low),
            PriorityFilter::Medium => Some(TaskPriority::Medium),
            PriorityFilter::High => Some(TaskPriority::High),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DueDateFilter {
    #[default]
    All,
    /// Due before now; a due date counts from the start of its day.
    Overdue,
    Today,
    /// Due today or within the next seven days.
    Week,
}

impl FromStr for DueDateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "overdue" => Ok(Self::Overdue),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            other => Err(format!("unknown due date filter '{}'", other)),
        }
    }
}

/// Filter settings for the tasks of a column.
///
/// This holds what to filter by; [`super::TaskFilter`] implementations do
/// the matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilters {
    pub search_term: String,
    pub priority: PriorityFilter,
    pub due_date: DueDateFilter,
}

impl TaskFilters {
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.priority != PriorityFilter::All
            || self.due_date != DueDateFilter::All
    }

    /// Build the AND-combined matcher for these settings.
    pub fn to_filter(&self, now: NaiveDateTime) -> CompositeFilter {
        let mut filter = CompositeFilter::new();
        if !self.search_term.is_empty() {
            filter = filter.with_filter(Box::new(SearchFilter::new(&self.search_term)));
        }
        if let Some(priority) = self.priority.priority() {
            filter = filter.with_filter(Box::new(PriorityMatch::new(priority)));
        }
        if self.due_date != DueDateFilter::All {
            filter = filter.with_filter(Box::new(DueDateMatch::new(self.due_date, now)));
        }
        filter
    }
}
