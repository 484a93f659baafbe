use crate::tui::app::{App, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle DetailView mode key events
pub fn handle_detail_view(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
        KeyCode::PageDown => {
            for _ in 0..5 {
                app.scroll_detail_down();
            }
        }
        KeyCode::PageUp => {
            for _ in 0..5 {
                app.scroll_detail_up();
            }
        }
        KeyCode::Char('d') => {
            app.input_mode = InputMode::Normal;
            app.open_delete_confirm();
        }
        _ => {}
    }

    false
}
