//! Key handling, one module per input mode.

mod detail_view;
mod filter;
mod modal_create;
mod modal_delete;
mod normal_mode;

use crate::tui::app::{App, InputMode};
use crossterm::event::KeyEvent;

pub use detail_view::handle_detail_view;
pub use filter::handle_filter_mode;
pub use modal_create::handle_create_form;
pub use modal_delete::handle_delete_confirm;
pub use normal_mode::handle_normal_mode;

/// Route a key press to the handler for the current mode.
/// Returns true if the application should quit.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Messages last until the next key press
    app.message = None;

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Filter => handle_filter_mode(app, key),
        InputMode::CreateForm => handle_create_form(app, key),
        InputMode::DeleteConfirm => handle_delete_confirm(app, key),
        InputMode::DetailView => handle_detail_view(app, key),
    }
}
