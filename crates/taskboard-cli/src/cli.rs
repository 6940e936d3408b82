use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskboard_domain::{parse_due_date, DueDateFilter, PriorityFilter, TaskPriority};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "A local-first task board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding board data (or set TASKBOARD_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", env = "TASKBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Storage key the board collection is saved under
    #[arg(long, global = true, value_name = "KEY")]
    pub storage_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Task operations
    Task(TaskCommand),
    /// Print every board as JSON
    Export,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// List all boards with column and task counts
    List,
    /// Open a board and print it
    Get {
        #[arg(long)]
        id: String,
    },
    /// Update a board
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a board with all its columns and tasks
    Delete {
        #[arg(long)]
        id: String,
    },
}

// Column commands
#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Append a column to a board
    Create {
        #[arg(long)]
        board_id: String,
        #[arg(long)]
        title: String,
    },
    /// List a board's columns left to right
    List {
        #[arg(long)]
        board_id: String,
    },
    /// Rename a column
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: String,
    },
    /// Delete a column with all its tasks
    Delete {
        #[arg(long)]
        id: String,
    },
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task at the end of a column
    Create(TaskCreateArgs),
    /// List a column's tasks in order, with optional filters
    List(TaskListArgs),
    /// Get a specific task
    Get {
        #[arg(long)]
        id: String,
    },
    /// Update a task's content
    Update(TaskUpdateArgs),
    /// Delete a task
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Move a task to another column
    Move {
        #[arg(long)]
        id: String,
        #[arg(long)]
        column_id: String,
        /// Position in the target column (default: end)
        #[arg(long, allow_hyphen_values = true)]
        order: Option<i32>,
    },
    /// Change a task's position within its column
    Reorder {
        #[arg(long)]
        id: String,
        #[arg(long, allow_hyphen_values = true)]
        order: i32,
    },
}

#[derive(Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub board_id: String,
    #[arg(long)]
    pub column_id: String,
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub creator: String,
    /// low, medium or high
    #[arg(long, default_value = "medium")]
    pub priority: TaskPriority,
    /// YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub due_date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct TaskListArgs {
    #[arg(long)]
    pub column_id: String,
    /// Case-insensitive match on title or description
    #[arg(long, default_value = "")]
    pub search: String,
    /// all, low, medium or high
    #[arg(long, default_value = "all")]
    pub priority: PriorityFilter,
    /// all, overdue, today or week
    #[arg(long, default_value = "all")]
    pub due: DueDateFilter,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub creator: Option<String>,
    #[arg(long)]
    pub priority: Option<TaskPriority>,
    #[arg(long, value_parser = parse_date, conflicts_with = "clear_due_date")]
    pub due_date: Option<NaiveDate>,
    #[arg(long)]
    pub clear_due_date: bool,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_due_date(raw).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", raw))
}
