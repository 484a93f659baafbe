use crate::cli::commands::{PriorityArg, StatusArg};
use crate::model::normalize_tags;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::parse_id;

/// Parameters for update operation
pub struct UpdateParams {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<PriorityArg>,
    pub status: Option<StatusArg>,
    pub add_tag: Vec<String>,
    pub remove_tag: Vec<String>,
    pub json: bool,
}

pub fn handle_update(ctx: &CommandContext, params: UpdateParams) -> Result<()> {
    let id = parse_id(&params.id)?;
    let mut note = ctx.repo.get(id)?;

    if let Some(t) = params.title {
        note.title = t.trim().to_string();
    }
    if let Some(c) = params.content {
        note.content = c.trim().to_string();
    }
    if let Some(p) = params.priority {
        note.priority = p.into();
    }
    if let Some(s) = params.status {
        note.status = s.into();
    }
    for t in normalize_tags(&params.add_tag) {
        if !note.tags.contains(&t) {
            note.tags.push(t);
        }
    }
    let removed = normalize_tags(&params.remove_tag);
    note.tags.retain(|t| !removed.contains(t));

    // created_at comes from the stored note, so the original date survives.
    ctx.repo
        .save(&mut note)
        .with_context(|| format!("Failed to update note {}", id))?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("{} {}", "Updated note".green(), id.to_string().cyan());
    }
    Ok(())
}
