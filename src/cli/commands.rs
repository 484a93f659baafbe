use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notebook")]
#[command(
    author,
    version,
    about = "A personal notebook: short notes with priority and status, kept in one JSON file"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the notes file (overrides config)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to config file (searches upward for .notebook.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new note
    #[command(visible_alias = "new")]
    Add {
        /// Title of the note
        title: String,

        /// Note text
        content: String,

        /// Priority level (defaults to the configured default, normally medium)
        #[arg(short, long, value_enum, ignore_case = true)]
        priority: Option<PriorityArg>,

        /// Initial status (defaults to the configured default, normally active)
        #[arg(short, long, value_enum, ignore_case = true)]
        status: Option<StatusArg>,

        /// Tags to add
        #[arg(long)]
        tag: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List notes, optionally filtered
    #[command(visible_alias = "ls")]
    List {
        /// Filter by priority
        #[arg(short, long, value_enum, ignore_case = true)]
        priority: Option<PriorityArg>,

        /// Filter by status
        #[arg(short, long, value_enum, ignore_case = true)]
        status: Option<StatusArg>,

        /// Filter by creation date (substring, e.g. 2024-03 or 2024-03-15)
        #[arg(long)]
        date: Option<String>,

        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search titles and contents (case-insensitive)
    Search {
        /// Text to look for
        keyword: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a note in full
    Show {
        /// Note ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a note, keeping its ID and creation date
    Update {
        /// Note ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,

        /// New priority
        #[arg(short, long, value_enum, ignore_case = true)]
        priority: Option<PriorityArg>,

        /// New status
        #[arg(short, long, value_enum, ignore_case = true)]
        status: Option<StatusArg>,

        /// Add a tag
        #[arg(long)]
        add_tag: Vec<String>,

        /// Remove a tag
        #[arg(long)]
        remove_tag: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note permanently
    #[command(visible_alias = "rm")]
    Delete {
        /// Note ID
        id: String,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive notebook
    Tui,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for crate::model::Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => crate::model::Priority::Low,
            PriorityArg::Medium => crate::model::Priority::Medium,
            PriorityArg::High => crate::model::Priority::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Active,
    Done,
    Archived,
}

impl From<StatusArg> for crate::model::Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => crate::model::Status::Active,
            StatusArg::Done => crate::model::Status::Done,
            StatusArg::Archived => crate::model::Status::Archived,
        }
    }
}
