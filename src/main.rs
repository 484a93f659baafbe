use anyhow::Result;
use clap::Parser;

use notebook::cli::handlers::{
    self, AddParams, CommandContext, ListParams, UpdateParams,
};
use notebook::cli::{Cli, Commands};
use notebook::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it only logs to a file.
    let log_to_stderr = !matches!(cli.command, Commands::Tui);
    logging::init(cli.verbose, cli.log_file.as_deref(), log_to_stderr);

    let ctx = CommandContext::load(cli.config.as_deref(), cli.file.as_deref())?;

    match cli.command {
        Commands::Add {
            title,
            content,
            priority,
            status,
            tag,
            json,
        } => handlers::handle_add(
            &ctx,
            AddParams {
                title,
                content,
                priority,
                status,
                tag,
                json,
            },
        ),
        Commands::List {
            priority,
            status,
            date,
            tag,
            json,
        } => handlers::handle_list(
            &ctx,
            ListParams {
                priority,
                status,
                date,
                tag,
                json,
            },
        ),
        Commands::Search { keyword, json } => handlers::handle_search(&ctx, keyword, json),
        Commands::Show { id, json } => handlers::handle_show(&ctx, id, json),
        Commands::Update {
            id,
            title,
            content,
            priority,
            status,
            add_tag,
            remove_tag,
            json,
        } => handlers::handle_update(
            &ctx,
            UpdateParams {
                id,
                title,
                content,
                priority,
                status,
                add_tag,
                remove_tag,
                json,
            },
        ),
        Commands::Delete { id, force, json } => handlers::handle_delete(&ctx, id, force, json),
        Commands::Tui => handlers::handle_tui(ctx),
    }
}
