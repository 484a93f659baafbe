use anyhow::Result;

use super::CommandContext;
use super::utils::{parse_id, print_note};

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let id = parse_id(&id)?;
    let note = ctx.repo.get(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        print_note(&note);
    }
    Ok(())
}
