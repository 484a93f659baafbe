use crate::query;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_search_results;

pub fn handle_search(ctx: &CommandContext, keyword: String, json: bool) -> Result<()> {
    let results = query::search(ctx.repo.get_all(), &keyword);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Found {} results for '{}':\n", results.len(), keyword);
        print_search_results(&results);
    }
    Ok(())
}
