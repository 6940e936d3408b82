use crate::cli::{TaskAction, TaskCreateArgs, TaskListArgs, TaskUpdateArgs};
use crate::context::CliContext;
use crate::handlers::required_title;
use crate::output;
use serde::Serialize;
use taskboard_domain::{
    filter_tasks, FieldUpdate, NewTask, Task, TaskBoardOperations, TaskFilters, TaskUpdate,
};

/// A column's tasks after filtering, with the settings that produced them
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FilteredTasks {
    items: Vec<Task>,
    count: usize,
    filters: TaskFilters,
    filters_active: bool,
}

pub fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Create(args) => handle_create(ctx, args)?,
        TaskAction::List(args) => handle_list(ctx, args),
        TaskAction::Get { id } => match ctx.state().task(&id) {
            Some(task) => output::output_success(task),
            None => output::output_error(&format!("Task not found: {}", id)),
        },
        TaskAction::Update(args) => handle_update(ctx, args),
        TaskAction::Delete { id } => {
            if ctx.state().task(&id).is_none() {
                output::output_error(&format!("Task not found: {}", id));
            }
            ctx.delete_task(&id);
            output::output_success(serde_json::json!({ "deleted": id }));
        }
        TaskAction::Move {
            id,
            column_id,
            order,
        } => {
            if ctx.state().task(&id).is_none() {
                output::output_error(&format!("Task not found: {}", id));
            }
            if ctx.state().column(&column_id).is_none() {
                output::output_error(&format!("Column not found: {}", column_id));
            }
            ctx.move_task(&id, &column_id, order);
            output_task(ctx, &id);
        }
        TaskAction::Reorder { id, order } => {
            if ctx.state().task(&id).is_none() {
                output::output_error(&format!("Task not found: {}", id));
            }
            ctx.reorder_task(&id, order);
            output_task(ctx, &id);
        }
    }
    Ok(())
}

fn handle_create(ctx: &mut CliContext, args: TaskCreateArgs) -> anyhow::Result<()> {
    let title = required_title(&args.title, "Task");
    let Some(board) = ctx.state().board(&args.board_id) else {
        output::output_error(&format!("Board not found: {}", args.board_id));
    };
    if board.column(&args.column_id).is_none() {
        output::output_error(&format!(
            "Column {} not found on board {}",
            args.column_id, args.board_id
        ));
    }

    // New tasks are positioned against the open board.
    ctx.set_current_board(&args.board_id);
    let task = NewTask::new(title)
        .with_description(args.description.trim())
        .with_creator(args.creator.trim())
        .with_priority(args.priority)
        .with_due_date(args.due_date);
    ctx.create_task(&args.column_id, task);

    let created = ctx
        .state()
        .column(&args.column_id)
        .and_then(|c| c.tasks.last());
    match created {
        Some(task) => output::output_success(task),
        None => anyhow::bail!("Task was not created"),
    }
    Ok(())
}

fn handle_list(ctx: &CliContext, args: TaskListArgs) {
    let Some(column) = ctx.state().column(&args.column_id) else {
        output::output_error(&format!("Column not found: {}", args.column_id));
    };
    let filters = TaskFilters {
        search_term: args.search.trim().to_string(),
        priority: args.priority,
        due_date: args.due,
    };
    let items: Vec<Task> = filter_tasks(column.sorted_tasks(), &filters)
        .into_iter()
        .cloned()
        .collect();
    output::output_success(FilteredTasks {
        count: items.len(),
        items,
        filters_active: filters.has_active_filters(),
        filters,
    });
}

fn handle_update(ctx: &mut CliContext, args: TaskUpdateArgs) {
    if ctx.state().task(&args.id).is_none() {
        output::output_error(&format!("Task not found: {}", args.id));
    }

    let due_date = if args.clear_due_date {
        FieldUpdate::Clear
    } else {
        args.due_date
            .map(FieldUpdate::Set)
            .unwrap_or(FieldUpdate::NoChange)
    };
    let updates = TaskUpdate {
        title: args.title.map(|t| required_title(&t, "Task")),
        description: args.description.map(|d| d.trim().to_string()),
        creator: args.creator.map(|c| c.trim().to_string()),
        priority: args.priority,
        due_date,
    };
    if updates.is_empty() {
        output::output_error("No fields to update");
    }

    ctx.update_task(&args.id, updates);
    output_task(ctx, &args.id);
}

fn output_task(ctx: &CliContext, id: &str) {
    match ctx.state().task(id) {
        Some(task) => output::output_success(task),
        None => output::output_error(&format!("Task not found: {}", id)),
    }
}
