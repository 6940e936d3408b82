use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::handlers::required_title;
use crate::output;
use taskboard_domain::{summarize, TaskBoardOperations};

pub fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { title, description } => {
            let title = required_title(&title, "Board");
            ctx.create_board(title, description.trim().to_string());
            match ctx.state().boards.last() {
                Some(board) => output::output_success(board),
                None => anyhow::bail!("Board was not created"),
            }
        }
        BoardAction::List => {
            output::output_list(summarize(&ctx.state().boards));
        }
        BoardAction::Get { id } => {
            ctx.set_current_board(&id);
            match ctx.state().current_board() {
                Some(board) => output::output_success(board),
                None => output::output_error(&format!("Board not found: {}", id)),
            }
        }
        BoardAction::Update {
            id,
            title,
            description,
        } => {
            let Some(board) = ctx.state().board(&id) else {
                output::output_error(&format!("Board not found: {}", id));
            };
            let title = match title {
                Some(title) => required_title(&title, "Board"),
                None => board.title.clone(),
            };
            let description = description
                .map(|d| d.trim().to_string())
                .unwrap_or_else(|| board.description.clone());

            ctx.update_board(&id, title, description);
            if let Some(board) = ctx.state().board(&id) {
                output::output_success(board);
            }
        }
        BoardAction::Delete { id } => {
            if ctx.state().board(&id).is_none() {
                output::output_error(&format!("Board not found: {}", id));
            }
            ctx.delete_board(&id);
            output::output_success(serde_json::json!({ "deleted": id }));
        }
    }
    Ok(())
}
