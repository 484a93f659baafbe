use crate::cli::commands::{PriorityArg, StatusArg};
use crate::query::NoteFilter;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_note_list;

/// Parameters for list operation
pub struct ListParams {
    pub priority: Option<PriorityArg>,
    pub status: Option<StatusArg>,
    pub date: Option<String>,
    pub tag: Option<String>,
    pub json: bool,
}

pub fn handle_list(ctx: &CommandContext, params: ListParams) -> Result<()> {
    let mut filter = NoteFilter::default();
    if let Some(p) = params.priority {
        filter = filter.with_priority(p.into());
    }
    if let Some(s) = params.status {
        filter = filter.with_status(s.into());
    }
    if let Some(date) = params.date {
        filter = filter.with_date(date);
    }
    if let Some(ref tag) = params.tag {
        filter = filter.with_tag(tag);
    }

    let notes = filter.apply(ctx.repo.get_all());

    if params.json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
    } else {
        print_note_list(&notes);
    }
    Ok(())
}
