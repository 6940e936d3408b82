use crate::context::CliContext;
use taskboard_domain::TaskBoardOperations;

/// Print the raw board collection, as stored
pub fn handle_export(ctx: &CliContext) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&ctx.state().boards)?;
    println!("{}", json);
    Ok(())
}
