use crate::cli::ColumnAction;
use crate::context::CliContext;
use crate::handlers::required_title;
use crate::output;
use taskboard_domain::{Column, TaskBoardOperations};

pub fn handle(ctx: &mut CliContext, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Create { board_id, title } => {
            let title = required_title(&title, "Column");
            if ctx.state().board(&board_id).is_none() {
                output::output_error(&format!("Board not found: {}", board_id));
            }
            ctx.create_column(&board_id, title);
            let created = ctx
                .state()
                .board(&board_id)
                .and_then(|b| b.columns.last());
            match created {
                Some(column) => output::output_success(column),
                None => anyhow::bail!("Column was not created"),
            }
        }
        ColumnAction::List { board_id } => match ctx.state().board(&board_id) {
            Some(board) => {
                let columns: Vec<Column> = board.sorted_columns().into_iter().cloned().collect();
                output::output_list(columns);
            }
            None => output::output_error(&format!("Board not found: {}", board_id)),
        },
        ColumnAction::Update { id, title } => {
            let title = required_title(&title, "Column");
            if ctx.state().column(&id).is_none() {
                output::output_error(&format!("Column not found: {}", id));
            }
            ctx.update_column(&id, title);
            if let Some(column) = ctx.state().column(&id) {
                output::output_success(column);
            }
        }
        ColumnAction::Delete { id } => {
            let Some(column) = ctx.state().column(&id) else {
                output::output_error(&format!("Column not found: {}", id));
            };
            let removed_tasks = column.tasks.len();
            ctx.delete_column(&id);
            output::output_success(serde_json::json!({
                "deleted": id,
                "removedTasks": removed_tasks,
            }));
        }
    }
    Ok(())
}
