use crate::tui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle Filter mode key events. The list narrows on every keystroke.
pub fn handle_filter_mode(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.clear_search();
        }
        KeyCode::Char(c) => {
            app.search_query.push(c);
            app.apply_filter();
        }
        KeyCode::Backspace => {
            app.search_query.pop();
            app.apply_filter();
        }
        _ => {}
    }

    false
}
