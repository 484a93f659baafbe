use crate::cli::commands::{PriorityArg, StatusArg};
use crate::model::Note;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

/// Parameters for add operation
pub struct AddParams {
    pub title: String,
    pub content: String,
    pub priority: Option<PriorityArg>,
    pub status: Option<StatusArg>,
    pub tag: Vec<String>,
    pub json: bool,
}

pub fn handle_add(ctx: &CommandContext, params: AddParams) -> Result<()> {
    let defaults = &ctx.config.notebook;
    let mut note = Note::new(&params.title, &params.content)?
        .with_priority(
            params
                .priority
                .map(Into::into)
                .unwrap_or(defaults.default_priority),
        )
        .with_status(params.status.map(Into::into).unwrap_or(defaults.default_status))
        .with_tags(&params.tag);

    ctx.repo
        .save(&mut note)
        .context("Failed to save the note")?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else if let Some(id) = note.id {
        println!("{} {}", "Note added with ID:".green(), id.to_string().cyan());
    }
    Ok(())
}
