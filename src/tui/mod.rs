//! Terminal user interface for the notebook.
//!
//! An interactive form built with ratatui for browsing and editing notes.
//!
//! ## Usage
//!
//! ```bash
//! notebook tui
//! ```
//!
//! ## Keybindings
//!
//! - `↑/↓`: Navigate up/down
//! - `/`: Live search on title and content
//! - `Enter`: Open detail view
//! - `a`: Add a new note
//! - `d`: Delete the selected note (asks for confirmation)
//! - `r`: Refresh from disk
//! - `?`: Help
//! - `q`: Quit

pub mod app;
pub mod handlers;
pub mod theme;
mod ui;
mod ui_modals;
mod ui_utils;

pub use app::run_tui;
