use crate::tui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle DeleteConfirm mode key events
pub fn handle_delete_confirm(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.input_mode = InputMode::Normal;
            app.message = Some("Cancelled.".to_string());
        }
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.delete_selected();
        }
        _ => {}
    }

    false
}
