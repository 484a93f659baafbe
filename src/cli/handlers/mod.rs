mod add;
mod delete;
mod list;
mod search;
mod show;
mod tui;
mod update;
mod utils;

pub use add::{AddParams, handle_add};
pub use delete::handle_delete;
pub use list::{ListParams, handle_list};
pub use search::handle_search;
pub use show::handle_show;
pub use tui::handle_tui;
pub use update::{UpdateParams, handle_update};

use crate::config::NotebookConfig;
use crate::storage::NoteRepository;
use anyhow::{Context, Result};
use std::path::Path;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: NotebookConfig,
    pub repo: NoteRepository,
}

impl CommandContext {
    pub fn new(config: NotebookConfig, root: &Path) -> Self {
        let repo = NoteRepository::from_config(&config, root);
        Self { config, repo }
    }

    /// Resolves configuration from `--config` (or upward discovery from the
    /// current directory) and applies a `--file` override.
    pub fn load(config_path: Option<&Path>, file: Option<&Path>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => NotebookConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir()?;
                NotebookConfig::discover(&cwd).context("Failed to load notebook configuration")?
            }
        };

        let mut ctx = Self::new(config, &root);
        if let Some(file) = file {
            ctx.repo = NoteRepository::new(file);
        }
        tracing::debug!(path = %ctx.repo.path().display(), "Using notes file");
        Ok(ctx)
    }
}
