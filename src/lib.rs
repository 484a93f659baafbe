//! # Notebook - short notes in a single JSON file
//!
//! Notebook keeps personal notes, each with a priority and a status, in one
//! human-readable JSON file. It can be used from the command line or through
//! an interactive terminal form.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a note
//! notebook add "Buy milk" "2% organic" -p high
//!
//! # List active notes
//! notebook list -s active
//!
//! # Search titles and contents
//! notebook search milk
//!
//! # Delete a note
//! notebook delete 1
//!
//! # Open the interactive form
//! notebook tui
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Note, Priority, Status)
//! - [`query`]: Filters and keyword search
//! - [`storage`]: The JSON file repository
//! - [`tui`]: Terminal user interface
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.notebook.toml` configuration files and their discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `NotebookError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for notes.
pub mod model;

pub mod query;

/// File-based storage layer.
///
/// Reads and rewrites the notes file as a whole.
pub mod storage;

/// Terminal user interface.
///
/// Interactive notebook built with ratatui.
pub mod tui;

/// Input validation utilities.
///
/// Validates titles, contents, tags and user-supplied IDs.
pub mod validation;
