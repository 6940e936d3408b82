use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{board::BoardId, column::ColumnId, field_update::FieldUpdate};

pub type TaskId = String;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// A unit of work inside a column.
///
/// `column_id` and `board_id` always name the column and board that hold the
/// task; the reducer rewrites both whenever the task changes hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, deserialize_with = "deserialize_due_date")]
    pub due_date: Option<NaiveDate>,
    pub column_id: ColumnId,
    pub board_id: BoardId,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub order: i32,
}

impl Task {
    pub fn new(
        id: TaskId,
        board_id: BoardId,
        column_id: ColumnId,
        data: NewTask,
        created_at: DateTime<Utc>,
        order: i32,
    ) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            creator: data.creator,
            priority: data.priority,
            due_date: data.due_date,
            column_id,
            board_id,
            created_at,
            order,
        }
    }

    /// A due date is the start of its day, so a task due today is overdue
    /// from just after midnight. Tasks without a due date are never overdue.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.due_date.is_some_and(|due| due.and_time(NaiveTime::MIN) < now)
    }
}

/// User-supplied fields of a task that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub creator: String,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Partial update of a task's content fields.
///
/// Placement (`column_id`, `board_id`, `order`) is not part of an update; it
/// only changes through move and reorder actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub creator: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: FieldUpdate<NaiveDate>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.creator.is_none()
            && self.priority.is_none()
            && !self.due_date.is_change()
    }
}

/// Parse a due date written either as `YYYY-MM-DD` or as a full RFC 3339
/// timestamp (only the date part is kept).
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

// Older data files store a missing due date as "".
fn deserialize_due_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_due_date(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid due date '{}'", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn sample_task() -> Task {
        Task::new(
            "t1".to_string(),
            "b1".to_string(),
            "c1".to_string(),
            NewTask::new("Write release notes").with_due_date(Some(date(2024, 3, 10))),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            0,
        )
    }

    #[test]
    fn test_priority_from_str_is_case_insensitive() {
        assert_eq!("HIGH".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!(" low ".parse::<TaskPriority>().unwrap(), TaskPriority::Low);
        assert!("critical".parse::<TaskPriority>().is_err());
    }

    #[test]
    fn test_is_overdue() {
        let task = sample_task();
        assert!(task.is_overdue(at(2024, 3, 11, 0, 0)));
        assert!(task.is_overdue(at(2024, 3, 10, 8, 15)));
        assert!(!task.is_overdue(at(2024, 3, 10, 0, 0)));
        assert!(!task.is_overdue(at(2024, 3, 9, 23, 59)));

        let undated = Task {
            due_date: None,
            ..sample_task()
        };
        assert!(!undated.is_overdue(at(2030, 1, 1, 12, 0)));
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let value = serde_json::to_value(sample_task()).unwrap();
        assert_eq!(value["columnId"], "c1");
        assert_eq!(value["boardId"], "b1");
        assert_eq!(value["dueDate"], "2024-03-10");
        assert_eq!(value["priority"], "medium");
        assert!(value.get("column_id").is_none());
    }

    #[test]
    fn test_empty_due_date_reads_as_none() {
        let task: Task = serde_json::from_value(json!({
            "id": "t1",
            "title": "Legacy",
            "description": "",
            "creator": "sam",
            "priority": "high",
            "dueDate": "",
            "columnId": "c1",
            "boardId": "b1",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "order": 2
        }))
        .unwrap();
        assert_eq!(task.due_date, None);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.order, 2);
    }

    #[test]
    fn test_invalid_due_date_is_rejected() {
        let result: Result<Task, _> = serde_json::from_value(json!({
            "id": "t1",
            "title": "Broken",
            "dueDate": "next tuesday",
            "columnId": "c1",
            "boardId": "b1",
            "createdAt": "2024-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_due_date_accepts_timestamps() {
        assert_eq!(parse_due_date("2024-05-01"), Some(date(2024, 5, 1)));
        assert_eq!(
            parse_due_date("2024-05-01T12:00:00Z"),
            Some(date(2024, 5, 1))
        );
        assert_eq!(parse_due_date("05/01/2024"), None);
    }

    #[test]
    fn test_task_update_is_empty() {
        assert!(TaskUpdate::default().is_empty());
        let update = TaskUpdate {
            due_date: FieldUpdate::Clear,
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
