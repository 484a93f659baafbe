use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::CommandContext;
use super::utils::parse_id;

pub fn handle_delete(ctx: &CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    let id = parse_id(&id)?;
    let note = ctx.repo.get(id)?;

    if !force && !json {
        print!(
            "Delete note {} ({}) permanently? [y/N] ",
            id.to_string().cyan(),
            note.title
        );
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    ctx.repo.delete(id)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "deleted",
                "id": id
            }))?
        );
    } else {
        println!("{} {}", "Deleted note".red(), id.to_string().cyan());
    }
    Ok(())
}
